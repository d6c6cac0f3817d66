//! Error types for the StayFinder API client.

use stayfinder_core::ValidationError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the StayFinder backend.
///
/// Nothing here is fatal: every failure resolves to a degraded UI state
/// (empty list, inline message, disabled action), never a crash.
#[derive(Debug, Error)]
pub enum Error {
    /// Login or register rejected; carries the server body unchanged.
    #[error("Authentication failed: {body}")]
    Auth {
        /// Raw server response body.
        body: String,
    },

    /// Client-side precondition failure. Never reached the network.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-2xx server response.
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw server response body.
        body: String,
    },

    /// HTTP request failed before a response arrived.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be parsed.
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Persisted token could not be read or written.
    #[error("Token store failure: {0}")]
    TokenStore(String),
}

impl Error {
    /// The message to surface to the user.
    ///
    /// Server errors carry their `msg` field verbatim when the body has one;
    /// everything else falls back to the caller-supplied generic text.
    /// Validation errors always surface their own wording.
    #[must_use]
    pub fn surface_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(validation) => validation.to_string(),
            Self::Api { body, .. } | Self::Auth { body } => server_msg(body)
                .unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

/// Extract the backend's `msg` field from an error body, when present.
fn server_msg(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("msg")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_msg_surfaced_verbatim() {
        let err = Error::Api {
            status: 400,
            body: r#"{"msg":"Room type not available"}"#.to_string(),
        };
        assert_eq!(err.surface_message("Booking failed"), "Room type not available");
    }

    #[test]
    fn test_fallback_when_body_has_no_msg() {
        let err = Error::Api {
            status: 500,
            body: "<html>Internal Server Error</html>".to_string(),
        };
        assert_eq!(err.surface_message("Booking failed"), "Booking failed");

        let err = Error::RequestFailed("connection refused".to_string());
        assert_eq!(
            err.surface_message("Failed to update booking status"),
            "Failed to update booking status"
        );
    }

    #[test]
    fn test_validation_errors_keep_their_own_wording() {
        let err = Error::Validation(ValidationError::MissingRoomType);
        assert_eq!(err.surface_message("Booking failed"), "Please select a room type");
    }
}
