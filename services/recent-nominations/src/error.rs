//! Error types for the recent nominations service

/// Errors that can occur in the recent nominations service
#[derive(Debug, thiserror::Error)]
pub enum NominationsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dashboard error: {0}")]
    Dashboard(String),
}

/// Result type alias for recent nominations operations
pub type Result<T> = std::result::Result<T, NominationsError>;
