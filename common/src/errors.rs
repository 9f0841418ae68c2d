//! Error types shared across the workspace.

use thiserror::Error;

/// Result alias used by every fallible operation.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while talking to the backend.
///
/// Transient and permanent failures are not distinguished: a 404 and a
/// refused connection are both just failures to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// Transport failure or an undecodable response body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A caller-supplied header name or value is malformed.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the HTTP status code when the failure came from the backend.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::HttpStatus(code) => Some(*code),
            AppError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = AppError::HttpStatus(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_config_error_has_no_status() {
        assert_eq!(AppError::Config("bad".into()).status(), None);
    }
}
