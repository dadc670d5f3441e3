//! Error types for todokit
//!
//! One error enum shared by the store service, the gateway client and
//! the tool runtime. Tool entry points convert these into benign values
//! at the boundary; everything below them propagates with `?`.

use thiserror::Error;

/// Main error type for todokit
#[derive(Error, Debug)]
pub enum TodoError {
    /// Store service answered with a non-2xx status
    #[error("HTTP error: status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Connection, timeout or other transport failure
    #[error("Request error: {0}")]
    Request(String),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Envelope carried a non-success code
    #[error("Upstream error: code {code}: {msg}")]
    Upstream { code: i64, msg: String },

    /// Tool name not present in the registry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments failed to parse
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Other error: {0}")]
    Generic(String),
}

/// Result type alias for todokit operations
pub type Result<T> = std::result::Result<T, TodoError>;

impl From<reqwest::Error> for TodoError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            TodoError::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if err.is_decode() {
            TodoError::Decode(err.to_string())
        } else {
            TodoError::Request(err.to_string())
        }
    }
}

/// Convert anyhow errors to TodoError
impl From<anyhow::Error> for TodoError {
    fn from(err: anyhow::Error) -> Self {
        TodoError::Generic(err.to_string())
    }
}

impl TodoError {
    /// Whether the failure happened before any response came back
    pub fn is_transport(&self) -> bool {
        matches!(self, TodoError::Request(_))
    }
}
