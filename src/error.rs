use thiserror::Error;

/// Origin of an [`ApiError`].
///
/// The status code alone cannot tell a local validation failure (400) from an
/// upstream 400, so the kind travels with every error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected locally before any network call.
    Validation,
    /// DNS, connect, TLS or timeout failure. No HTTP status is available.
    Transport,
    /// The server answered with a status >= 400.
    Http,
    /// HTTP 2xx, but the response envelope reported `success: false`.
    Envelope,
    /// The request body could not be encoded as JSON.
    Serialization,
    /// The response body could not be decoded into the expected type.
    Decode,
}

/// Coarse error classes, using the same vocabulary as the provider error
/// taxonomy (`invalid_request`, `authentication`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    InvalidRequest,
    Authentication,
    PermissionDenied,
    NotFound,
    RateLimited,
    ServerError,
    Network,
    Local,
    Other,
}

impl ErrorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::InvalidRequest => "invalid_request",
            ErrorClass::Authentication => "authentication",
            ErrorClass::PermissionDenied => "permission_denied",
            ErrorClass::NotFound => "not_found",
            ErrorClass::RateLimited => "rate_limited",
            ErrorClass::ServerError => "server_error",
            ErrorClass::Network => "network",
            ErrorClass::Local => "local",
            ErrorClass::Other => "other",
        }
    }
}

/// The single error type surfaced by every client operation.
///
/// `status_code` is the HTTP status for upstream failures, 400 for local
/// validation, 500 for a logical failure envelope and 0 when no status exists
/// (transport, serialization and decode failures).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("synqly API error (status {status_code}): {message}")]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
    pub kind: ErrorKind,
}

impl ApiError {
    pub fn new(kind: ErrorKind, status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            kind,
        }
    }

    /// Local parameter validation failure (always status 400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, 400, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, 0, message)
    }

    /// Upstream status >= 400. `body` is kept verbatim.
    pub fn http(status_code: u16, body: impl Into<String>) -> Self {
        Self::new(ErrorKind::Http, status_code, body)
    }

    /// Logical failure reported inside a 2xx envelope.
    pub fn envelope(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Envelope, 500, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, 0, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, 0, message)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    pub fn is_authentication(&self) -> bool {
        self.error_class() == ErrorClass::Authentication
    }

    pub fn error_class(&self) -> ErrorClass {
        match self.kind {
            ErrorKind::Validation => ErrorClass::InvalidRequest,
            ErrorKind::Transport => ErrorClass::Network,
            ErrorKind::Serialization | ErrorKind::Decode => ErrorClass::Local,
            ErrorKind::Envelope => ErrorClass::ServerError,
            ErrorKind::Http => match self.status_code {
                400 | 422 => ErrorClass::InvalidRequest,
                401 => ErrorClass::Authentication,
                403 => ErrorClass::PermissionDenied,
                404 => ErrorClass::NotFound,
                429 => ErrorClass::RateLimited,
                500..=599 => ErrorClass::ServerError,
                _ => ErrorClass::Other,
            },
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// Informational only: the client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.error_class(),
            ErrorClass::Network | ErrorClass::RateLimited
        ) || (self.kind == ErrorKind::Http && self.error_class() == ErrorClass::ServerError)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::decode(format!("failed to decode response: {}", e))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::transport(format!("request timed out: {}", e))
        } else {
            ApiError::transport(format!("request failed: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::validation("model is required");
        assert_eq!(
            err.to_string(),
            "synqly API error (status 400): model is required"
        );
    }

    #[test]
    fn http_status_maps_to_class() {
        let cases = vec![
            (400, ErrorClass::InvalidRequest),
            (401, ErrorClass::Authentication),
            (403, ErrorClass::PermissionDenied),
            (404, ErrorClass::NotFound),
            (418, ErrorClass::Other),
            (429, ErrorClass::RateLimited),
            (503, ErrorClass::ServerError),
        ];
        for (status, expected) in cases {
            assert_eq!(
                ApiError::http(status, "body").error_class(),
                expected,
                "status {} should map to {}",
                status,
                expected.as_str()
            );
        }
    }

    #[test]
    fn envelope_failure_is_not_retryable() {
        let err = ApiError::envelope("provider unavailable");
        assert_eq!(err.status_code, 500);
        assert_eq!(err.error_class(), ErrorClass::ServerError);
        assert!(!err.is_retryable());
    }

    #[test]
    fn retryable_classes() {
        assert!(ApiError::transport("connection refused").is_retryable());
        assert!(ApiError::http(429, "slow down").is_retryable());
        assert!(ApiError::http(502, "bad gateway").is_retryable());
        assert!(!ApiError::http(401, "denied").is_retryable());
        assert!(!ApiError::validation("messages cannot be empty").is_retryable());
        assert!(!ApiError::decode("eof").is_retryable());
    }

    #[test]
    fn local_errors_carry_no_status() {
        assert_eq!(ApiError::transport("x").status_code, 0);
        assert_eq!(ApiError::serialization("x").status_code, 0);
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert_eq!(err.kind, ErrorKind::Decode);
        assert_eq!(err.status_code, 0);
    }
}
