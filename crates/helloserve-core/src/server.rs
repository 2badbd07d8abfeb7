//! HTTP listener
//!
//! Accept loop on tokio with one spawned task per connection, each served by
//! hyper's HTTP/1.1 connection driver. Every request is answered with the
//! constant plaintext response; the request body is accumulated frame by
//! frame and printed once the stream ends.

use crate::response;
use crate::session::RequestSession;
use crate::{Error, Result};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub hostname: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            hostname: "0.0.0.0".to_string(),
        }
    }
}

/// Create the listening TCP socket
fn create_socket(addr: &SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR - allow binding to address in TIME_WAIT
    socket.set_reuse_address(true)?;

    // TCP_NODELAY - disable Nagle's algorithm for lower latency
    socket.set_nodelay(true)?;

    socket.bind(&(*addr).into())?;
    socket.listen(1024)?;

    // tokio requires the socket in nonblocking mode
    socket.set_nonblocking(true)?;
    TcpListener::from_std(socket.into())
}

/// The one process-wide listener.
///
/// Constructed once in the entry point and kept alive for the process
/// lifetime; there is no teardown path.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the configured address
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.hostname, config.port)
            .parse()
            .map_err(|e| Error::Addr(format!("{}:{} ({})", config.hostname, config.port, e)))?;

        let listener = create_socket(&addr)?;
        Ok(Self { listener })
    }

    /// Address the listener actually bound (useful with port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever.
    ///
    /// Connection-level failures are reported and dropped; the loop keeps
    /// accepting. There is no shutdown signal, timeout, or body size limit.
    pub async fn run(self) -> Result<()> {
        // sic - startup line kept exactly as the original printed it
        println!("Server listenning.");

        loop {
            let (stream, _) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(_) => continue,
            };

            tokio::spawn(async move {
                let io = TokioIo::new(stream);

                if let Err(e) = http1::Builder::new()
                    .serve_connection(io, service_fn(handle))
                    .await
                {
                    // Only log if not a normal connection close
                    if !e.to_string().contains("connection closed") {
                        eprintln!("Connection error: {}", e);
                    }
                }
            });
        }
    }
}

/// Handle one request: accumulate the body, log it, answer Hello World.
async fn handle(
    req: hyper::Request<Incoming>,
) -> std::result::Result<hyper::Response<Full<Bytes>>, hyper::Error> {
    // Path component only; uri().path() already excludes the query string
    let mut session = RequestSession::new(req.uri().path());

    let mut body = req.into_body();
    while let Some(frame) = body.frame().await {
        // A broken body stream tears down the connection; hyper's default
        if let Some(data) = frame?.data_ref() {
            session.push_chunk(data);
        }
    }

    println!("{}", session.log_line());
    Ok(response::hello())
}
