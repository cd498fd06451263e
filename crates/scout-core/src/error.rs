use thiserror::Error;

/// Application-wide error types for indeed-scout.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Caller-supplied search parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request failed (building, sending, or reading the body).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The remote API answered with a non-success status.
    #[error("API error (HTTP {status_code}): {body}")]
    ApiError { status_code: u16, body: String },

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Writing the output file failed.
    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

impl AppError {
    /// Returns true for failures talking to the remote API.
    ///
    /// These are recovered locally: the listing loop stops paginating and a
    /// detail fetch skips the one job. They never abort a run.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_)
                | AppError::ApiError { .. }
                | AppError::SerializationError(_)
                | AppError::Timeout(_)
                | AppError::NetworkError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors() {
        assert!(AppError::NetworkError("reset".into()).is_transport());
        assert!(AppError::Timeout(30).is_transport());
        assert!(
            AppError::ApiError {
                status_code: 502,
                body: "bad gateway".into(),
            }
            .is_transport()
        );
        assert!(!AppError::ConfigError("missing key".into()).is_transport());
        assert!(!AppError::InvalidArgument("empty".into()).is_transport());
        assert!(!AppError::PersistenceError("disk full".into()).is_transport());
    }

    #[test]
    fn test_api_error_display() {
        let err = AppError::ApiError {
            status_code: 401,
            body: "invalid api key".into(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 401): invalid api key");
    }
}
