//! Demonstration HTTP server entry point.
//!
//! Try it:
//! ```sh
//! curl -d "data=ASDFASF&data2=34534534" localhost:8080/somepath
//! ```

use helloserve_core::{Result, Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let server = Server::bind(&ServerConfig::default()).await?;
    server.run().await
}
