//! Error types for helloserve-core

use thiserror::Error;

/// Result type alias for helloserve operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the helloserve listener
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid bind address
    #[error("Invalid address: {0}")]
    Addr(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
