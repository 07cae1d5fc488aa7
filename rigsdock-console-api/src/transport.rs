//! Shared HTTP transport
//!
//! Every REST collaborator goes through [`HttpTransport`]: it owns the
//! `reqwest` client, resolves paths against the configured base URL, maps
//! statuses to [`ApiError`], and retries transient failures.
//!
//! Requests are passed as a builder closure rather than a `RequestBuilder`
//! so multipart bodies, which cannot be cloned, are rebuilt for each attempt.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Maximum number of bytes of a body written to the log.
const LOG_BODY_LIMIT: usize = 256;

/// Which failures a request may be sent again after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Reads and idempotent writes: every transient failure is retried
    Transient,
    /// Creates: only an explicit 429, which the backend answers before
    /// processing the request. A timeout or dropped connection may hide a
    /// create that already happened.
    RejectedOnly,
}

impl RetryPolicy {
    fn allows(self, error: &ApiError) -> bool {
        match self {
            Self::Transient => error.is_retryable(),
            Self::RejectedOnly => matches!(error, ApiError::RateLimited { .. }),
        }
    }
}

pub struct HttpTransport {
    client: Client,
    base: Url,
    max_retries: u32,
}

/// `{ "message": "..." }` body the backend sends with error statuses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base: config.base()?,
            max_retries: config.max_retries,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Absolute URL for `segments`, each percent-encoded.
    ///
    /// `url(&["admin", "category", id])` → `<base>/admin/category/<id>`
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let path = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        self.base
            .join(&path)
            .map_err(|e| ApiError::config(format!("Invalid request path {path:?}: {e}")))
    }

    /// Send once and classify the response.
    ///
    /// # Returns
    /// * `Ok(body)` - 2xx response text
    /// * `Err(ApiError::RateLimited)` - HTTP 429
    /// * `Err(ApiError::Network)` - connection failure or HTTP 502-504
    /// * `Err(ApiError::Status)` - any other non-success status
    async fn execute(request: RequestBuilder, label: &str) -> Result<String> {
        log::debug!("[api] {label}");

        let response = request.send().await.map_err(classify)?;

        let status = response.status().as_u16();
        log::debug!("[api] {label} -> HTTP {status}");

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response.text().await.map_err(classify)?;
        log::debug!("[api] Response Body: {}", truncate_for_log(&body));

        match status {
            200..=299 => Ok(body),
            429 => {
                log::warn!("[api] Rate limited (HTTP 429), retry_after={retry_after:?}");
                Err(ApiError::RateLimited { retry_after })
            }
            502..=504 => {
                log::warn!("[api] Gateway error (HTTP {status})");
                Err(ApiError::Network {
                    detail: format!("HTTP {status}"),
                })
            }
            _ => Err(ApiError::Status {
                status,
                message: backend_message(&body),
            }),
        }
    }

    /// Send with retries, rebuilding the request for every attempt.
    ///
    /// # Retry strategy
    /// - `policy` decides which failures are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds)
    /// - A `retry-after` hint on 429 is honoured, capped at 30 seconds
    pub async fn send<F>(&self, label: &str, policy: RetryPolicy, build: F) -> Result<String>
    where
        F: Fn(&Client) -> Result<RequestBuilder>,
    {
        let mut attempt = 0;
        loop {
            match Self::execute(build(&self.client)?, label).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.max_retries && policy.allows(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[api] {label} failed (attempt {}/{}), retrying in {:.1}s: {e}",
                        attempt + 1,
                        self.max_retries,
                        delay.as_secs_f32(),
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    if e.is_retryable() {
                        log::error!("[api] {label} failed: {e}");
                    } else {
                        log::warn!("[api] {label} failed: {e}");
                    }
                    return Err(e);
                }
            }
        }
    }

    /// [`send`](Self::send) and parse the body as JSON.
    pub async fn send_json<T, F>(&self, label: &str, policy: RetryPolicy, build: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn(&Client) -> Result<RequestBuilder>,
    {
        let body = self.send(label, policy, build).await?;
        parse_json(&body, label)
    }
}

fn classify(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout {
            detail: e.to_string(),
        }
    } else {
        ApiError::Network {
            detail: e.to_string(),
        }
    }
}

/// Parse a JSON body, logging the raw text on failure.
pub fn parse_json<T: DeserializeOwned>(body: &str, label: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("[api] {label}: JSON parse failed: {e}");
        log::error!("[api] Raw response: {}", truncate_for_log(body));
        ApiError::Parse {
            detail: e.to_string(),
        }
    })
}

/// The backend's own explanation, when the body carries one.
fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
    if let ApiError::RateLimited {
        retry_after: Some(secs),
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms doubling per attempt, capped at 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let shift = attempt.min(20);
    Duration::from_millis(100_u64.saturating_mul(1_u64 << shift).min(10_000))
}

/// Cut `body` to at most [`LOG_BODY_LIMIT`] bytes on a char boundary.
pub(crate) fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let end = body
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [{} bytes]", &body[..end], body.len())
}
