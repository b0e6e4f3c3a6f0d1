//! Unified client error handling.
//!
//! Every failure crossing the network or session boundary ends up as a
//! [`ClientError`]. Transport failures are normally carried inside the
//! [`ApiResponse`](crate::response::ApiResponse) envelope and only become a
//! `ClientError` when a caller asks for a `Result`.

use domain::DomainError;
use thiserror::Error;

/// Client error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    // Authentication & Authorization
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    /// Any other non-2xx answer or a `success: false` body
    #[error("{message}")]
    Api { status: u16, message: String },

    // Transport
    #[error("{0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    // Local state
    #[error("Session error: {0}")]
    Session(String),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

impl ClientError {
    /// Get error code
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Unauthorized(_) => "UNAUTHORIZED",
            ClientError::Forbidden(_) => "FORBIDDEN",
            ClientError::NotFound(_) => "NOT_FOUND",
            ClientError::Validation(_) => "VALIDATION_ERROR",
            ClientError::Api { .. } => "API_ERROR",
            ClientError::Network(_) => "NETWORK_ERROR",
            ClientError::Timeout => "TIMEOUT",
            ClientError::InvalidResponse(_) => "INVALID_RESPONSE",
            ClientError::Session(_) => "SESSION_ERROR",
            ClientError::Domain(_) => "DOMAIN_ERROR",
        }
    }

    /// HTTP status behind the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            ClientError::InvalidResponse(msg) => {
                tracing::error!("Invalid response: {}", msg);
                "The server sent an unexpected response".to_string()
            }
            ClientError::Session(msg) => {
                tracing::error!("Session error: {}", msg);
                "Your session could not be read or saved".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Map a failed HTTP status and its message to an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 422 => ClientError::Validation(message),
            401 => ClientError::Unauthorized(message),
            403 => ClientError::Forbidden(message),
            404 => ClientError::NotFound(message),
            _ => ClientError::Api { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }
}

/// Convenience constructors
impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ClientError::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        ClientError::Network(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        ClientError::Session(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        ClientError::InvalidResponse(msg.into())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidResponse(err.to_string())
    }
}

/// Result type alias
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ClientError::from_status(401, "Invalid credentials"),
            ClientError::Unauthorized("Invalid credentials".into())
        );
        assert_eq!(ClientError::from_status(422, "bad").code(), "VALIDATION_ERROR");
        assert_eq!(
            ClientError::from_status(500, "boom"),
            ClientError::Api {
                status: 500,
                message: "boom".into()
            }
        );
        assert_eq!(ClientError::from_status(404, "gone").status(), Some(404));
    }

    #[test]
    fn user_message_hides_internal_details() {
        let err = ClientError::invalid_response("expected `,` at line 1");
        assert_eq!(err.user_message(), "The server sent an unexpected response");
        assert_eq!(ClientError::Timeout.user_message(), "Request timed out");
    }

    #[test]
    fn domain_errors_keep_their_message() {
        let err: ClientError = DomainError::validation("Passwords do not match").into();
        assert_eq!(err.code(), "DOMAIN_ERROR");
        assert_eq!(err.user_message(), "Passwords do not match");
    }
}
