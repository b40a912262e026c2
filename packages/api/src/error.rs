//! Failures of backend round trips, grouped by how the UI reacts to them.

use reqwest::StatusCode;
use thiserror::Error;

use store::{CartError, ValidationError};

/// How a failure is surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Bad credentials or a rejected token: clear the session, go to login.
    Authentication,
    /// The backend refused an action for this role.
    Authorization,
    /// The request (or the input that would form it) was rejected; nothing changed.
    Validation,
    /// Unreachable backend, 5xx, or an unreadable response.
    Network,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("not signed in")]
    SignedOut,

    #[error("login response did not contain a token")]
    MissingToken,

    #[error("authentication failed: {}", .message.as_deref().unwrap_or("Unauthorized"))]
    Unauthorized { message: Option<String> },

    #[error("not allowed: {}", .message.as_deref().unwrap_or("Forbidden"))]
    Forbidden { message: Option<String> },

    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { status: u16, message: Option<String> },

    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("no reason given"))]
    Server { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid backend url: {0}")]
    BadUrl(String),
}

impl ApiError {
    /// Map a non-success response to an error, reading `{message}` from the body if present.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = server_message(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized { message },
            403 => ApiError::Forbidden { message },
            400 | 404 | 409 | 422 => ApiError::Rejected {
                status: status.as_u16(),
                message,
            },
            code => ApiError::Server {
                status: code,
                message,
            },
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::SignedOut | ApiError::MissingToken | ApiError::Unauthorized { .. } => {
                FailureKind::Authentication
            }
            ApiError::Forbidden { .. } => FailureKind::Authorization,
            ApiError::Invalid(_) | ApiError::Cart(_) | ApiError::Rejected { .. } => {
                FailureKind::Validation
            }
            ApiError::Server { .. }
            | ApiError::Network(_)
            | ApiError::Decode(_)
            | ApiError::BadUrl(_) => FailureKind::Network,
        }
    }

    /// The `{message}` the backend sent with the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::Forbidden { message }
            | ApiError::Rejected { message, .. }
            | ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for the notification shown at the point of the failed action.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized { message } => message.as_deref().unwrap_or("Unauthorized").to_string(),
            ApiError::Forbidden { message } => message.as_deref().unwrap_or("Forbidden").to_string(),
            ApiError::Rejected { status, message } => match message {
                Some(message) => message.clone(),
                None => StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Request rejected")
                    .to_string(),
            },
            ApiError::Server { .. }
            | ApiError::Network(_)
            | ApiError::Decode(_)
            | ApiError::BadUrl(_) => "Something went wrong. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.kind(), FailureKind::Authentication);
        assert_eq!(err.user_message(), "Unauthorized");

        let err = ApiError::from_status(StatusCode::FORBIDDEN, r#"{"message":"Admins only"}"#);
        assert_eq!(err.kind(), FailureKind::Authorization);
        assert_eq!(err.user_message(), "Admins only");

        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"message":"Not enough stock"}"#);
        assert_eq!(err.kind(), FailureKind::Validation);
        assert_eq!(err.user_message(), "Not enough stock");

        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.kind(), FailureKind::Network);
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
        assert_eq!(err.server_message(), None);

        let err = ApiError::from_status(StatusCode::NOT_FOUND, "");
        assert_eq!(err.user_message(), "Not Found");
    }

    #[test]
    fn test_server_message_is_kept_for_every_status() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{"message":"Wrong password"}"#);
        assert_eq!(err.server_message(), Some("Wrong password"));

        let err = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, r#"{"error":"Down for maintenance"}"#);
        assert_eq!(err.kind(), FailureKind::Network);
        assert_eq!(err.server_message(), Some("Down for maintenance"));
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_local_failures() {
        let err = ApiError::from(ValidationError::ZeroQuantity);
        assert_eq!(err.kind(), FailureKind::Validation);
        assert_eq!(err.user_message(), "quantity must be at least 1");
        assert_eq!(ApiError::SignedOut.kind(), FailureKind::Authentication);
    }
}
