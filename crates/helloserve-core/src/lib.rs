//! helloserve-core: demonstration HTTP server core
//!
//! A tutorial-scale listener on top of tokio/hyper: every request gets the
//! same `200 OK` plaintext answer, and the accumulated request body is
//! printed to the console once the body stream ends. There is no routing and
//! no request validation on purpose.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod response;
pub mod server;
pub mod session;

// Re-exports
pub use error::{Error, Result};
pub use server::{Server, ServerConfig};
pub use session::RequestSession;
