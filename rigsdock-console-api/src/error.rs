use rigsdock_console_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Transport-level failure talking to the storefront backend.
///
/// # Retryable Errors
///
/// [`Network`](Self::Network), [`Timeout`](Self::Timeout) and
/// [`RateLimited`](Self::RateLimited) are transient; the transport retries
/// them with exponential backoff unless the request is a create.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// Connection refused, reset, or a 502-504 from a gateway
    #[error("Network error: {detail}")]
    Network { detail: String },

    #[error("Request timed out: {detail}")]
    Timeout { detail: String },

    /// HTTP 429; `retry_after` is the server's hint in seconds
    #[error("Rate limited{}", .retry_after.map(|s| format!(" (retry after {s}s)")).unwrap_or_default())]
    RateLimited { retry_after: Option<u64> },

    /// Any other non-success status
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// The body did not have the expected shape
    #[error("Failed to parse response: {detail}")]
    Parse { detail: String },

    /// Invalid configuration or request input
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl ApiError {
    /// Whether the request may succeed if sent again
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    pub(crate) fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<ApiError> for CoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network { detail } => Self::NetworkError(detail),
            ApiError::Timeout { detail } => Self::Timeout(detail),
            ApiError::RateLimited { .. } => Self::ApiError {
                status: 429,
                message: Some("Too many requests. Please try again shortly.".to_string()),
            },
            ApiError::Status {
                status: 401,
                message,
            } => Self::Unauthorized(
                message.unwrap_or_else(|| "Please sign in again.".to_string()),
            ),
            ApiError::Status { status, message } => Self::ApiError { status, message },
            ApiError::Parse { detail } => Self::SerializationError(detail),
            ApiError::Config { detail } => Self::ValidationError(detail),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
