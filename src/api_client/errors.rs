//! KogniTerm server client error types.

use thiserror::Error;

/// Errors that can occur while talking to the KogniTerm server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// TCP/HTTP connection to the server failed (refused, reset, timed out).
    #[error("connection failed to {endpoint}: {reason}")]
    ConnectionFailed { endpoint: String, reason: String },

    /// Non-2xx HTTP response from the server.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The server answered 2xx but the body was not the expected shape.
    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl ApiError {
    /// Whether the server could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::ConnectionFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ApiError::HttpError {
            status: 422,
            body: "missing field `message`".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 422: missing field `message`");
    }

    #[test]
    fn test_is_unreachable() {
        let err = ApiError::ConnectionFailed {
            endpoint: "http://localhost:8000/api/chat".into(),
            reason: "connection refused".into(),
        };
        assert!(err.is_unreachable());
        assert!(!ApiError::InvalidResponse { reason: "x".into() }.is_unreachable());
    }
}
