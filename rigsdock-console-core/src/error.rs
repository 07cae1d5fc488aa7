//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::controller::Phase;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Builder or configuration input is invalid
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Resource not found on the backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend refused the credentials or the session token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The backend answered with a non-success status.
    ///
    /// `message` carries the backend's own reason when it sent one.
    #[error("API error (HTTP {status})")]
    ApiError {
        status: u16,
        message: Option<String>,
    },

    /// network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The backend did not answer within the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An action is not allowed in the controller's current phase
    #[error("Cannot {action} while {phase:?}")]
    InvalidPhase { action: &'static str, phase: Phase },

    /// The form has no field with this name
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The value kind does not match the field
    #[error("Field {field} expects {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    /// The controller has no mutation collaborator
    #[error("This view is read-only")]
    ReadOnly,

    /// The controller instance was destroyed
    #[error("Controller has been destroyed")]
    Destroyed,

    /// No session has been established
    #[error("Not signed in")]
    NotSignedIn,
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.); used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_)
            | Self::NotFound(_)
            | Self::Unauthorized(_)
            | Self::InvalidPhase { .. }
            | Self::UnknownField(_)
            | Self::FieldType { .. }
            | Self::ReadOnly
            | Self::Destroyed
            | Self::NotSignedIn => true,
            Self::ApiError { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Human-readable reason to surface to the user.
    ///
    /// `None` when the collaborator failed without saying why; callers fall
    /// back to a generic message.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::ApiError { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            Self::Unauthorized(message) => Some(message.clone()),
            Self::Timeout(_) => Some("Request timed out. Please try again.".to_string()),
            other => Some(other.to_string()),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_without_message_has_no_reason() {
        let err = CoreError::ApiError {
            status: 500,
            message: None,
        };
        assert_eq!(err.reason(), None);

        let blank = CoreError::ApiError {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.reason(), None);
    }

    #[test]
    fn api_error_reason_uses_backend_message() {
        let err = CoreError::ApiError {
            status: 409,
            message: Some("Category name already taken".to_string()),
        };
        assert_eq!(err.reason().as_deref(), Some("Category name already taken"));
        assert!(err.is_expected());
    }

    #[test]
    fn unauthorized_reason_is_bare_message() {
        let err = CoreError::Unauthorized("Invalid credentials. Please try again.".into());
        assert_eq!(
            err.reason().as_deref(),
            Some("Invalid credentials. Please try again.")
        );
    }

    #[test]
    fn server_errors_are_unexpected() {
        let err = CoreError::ApiError {
            status: 503,
            message: None,
        };
        assert!(!err.is_expected());
        assert!(!CoreError::NetworkError("reset".into()).is_expected());
    }

    #[test]
    fn timeout_has_its_own_reason() {
        let err = CoreError::Timeout("operation timed out".into());
        assert!(!err.is_expected());
        assert_eq!(
            err.reason().as_deref(),
            Some("Request timed out. Please try again.")
        );
    }
}
