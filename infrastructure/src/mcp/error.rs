//! Error types for the stdio server

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, McpError>;

/// Errors that end a serving session. Per-request problems are answered
/// on the wire instead and never surface here.
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Response writer stopped: {0}")]
    WriterStopped(String),
}
