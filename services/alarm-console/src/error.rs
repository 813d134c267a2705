//! Error types for the alarm console service

/// Errors that can occur in the alarm console service
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for alarm console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
