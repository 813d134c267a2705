//! Error types for the alarm API client

/// Errors surfaced by the alarm API client.
///
/// Every variant ends up as the single "error" state of a query; the
/// distinction only matters for log output and the message shown in the
/// table's error row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("API error {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::InvalidUrl(e.to_string())
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
