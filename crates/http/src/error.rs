//! Error handling for backend calls.

use thiserror::Error;

/// Fallback message when the server omits one in an error envelope.
pub const FALLBACK_MESSAGE: &str = "request failed";

/// Result type for all backend operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by [`crate::ApiClient`] calls.
///
/// Two kinds reach callers: application-level failures (the server answered
/// with a non-200 envelope code) and transport failures (network error,
/// timeout, or a non-2xx status with no envelope body). There is no retry at
/// this layer; every rejection propagates unchanged to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server responded with an envelope whose `code` is not 200.
    #[error("{message}")]
    Api { code: i64, message: String },

    /// Network-level failure; carries the underlying error unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body was not a recognizable envelope.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an application-level error from an envelope, substituting the
    /// generic fallback when the server supplied no message.
    pub fn api(code: i64, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        Self::Api { code, message }
    }

    /// Envelope code of an application-level failure, if this is one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for the server's "resource does not exist" envelope.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { code: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_server_message() {
        let err = ApiError::api(401, Some("token expired".to_string()));
        assert_eq!(err.to_string(), "token expired");
        assert_eq!(err.code(), Some(401));
    }

    #[test]
    fn missing_message_uses_fallback() {
        let err = ApiError::api(500, None);
        assert_eq!(err.to_string(), FALLBACK_MESSAGE);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn empty_message_uses_fallback() {
        let err = ApiError::api(500, Some(String::new()));
        assert_eq!(err.to_string(), FALLBACK_MESSAGE);
    }

    #[test]
    fn not_found_detection() {
        assert!(ApiError::api(404, Some("book not found".into())).is_not_found());
        assert!(!ApiError::api(400, Some("bad".into())).is_not_found());
    }
}
