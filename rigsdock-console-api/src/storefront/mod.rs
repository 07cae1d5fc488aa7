//! Storefront REST collaborators
//!
//! [`StorefrontApi`] implements the core fetch and mutation traits for every
//! console screen. Each request carries the bearer token of the current
//! session.

mod carousels;
mod categories;
mod notifications;
mod orders;

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use rigsdock_console_core::types::{Ack, Attachment, Identity};
use rigsdock_console_core::{CoreResult, SessionContext};

use crate::error::{ApiError, Result};
use crate::transport::{HttpTransport, RetryPolicy, truncate_for_log};
use crate::types::MutationBody;

/// Name of the file part in multipart saves
const IMAGE_PART: &str = "image";

pub struct StorefrontApi {
    transport: Arc<HttpTransport>,
    session: Arc<SessionContext>,
}

impl StorefrontApi {
    pub fn new(transport: Arc<HttpTransport>, session: Arc<SessionContext>) -> Self {
        Self { transport, session }
    }

    async fn bearer(&self) -> CoreResult<String> {
        Ok(self.session.access_token().await?.as_str().to_string())
    }

    /// Authenticated GET of `segments`, parsed as `T`.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(String, String)],
    ) -> CoreResult<T> {
        let token = self.bearer().await?;
        let url = self.transport.url(segments)?;
        let label = format!("GET {}", segments.join("/"));
        Ok(self
            .transport
            .send_json(&label, RetryPolicy::Transient, |client| {
                Ok(client.get(url.clone()).bearer_auth(&token).query(query))
            })
            .await?)
    }

    /// Authenticated multipart save; `POST` when `identity` is absent.
    ///
    /// A `POST` creates a record, so it is only sent again after a 429.
    async fn save_multipart(
        &self,
        collection: &[&str],
        identity: Option<&Identity>,
        parts: &[(&'static str, String)],
        attachment: Option<&Attachment>,
    ) -> CoreResult<Ack> {
        let token = self.bearer().await?;
        let mut segments = collection.to_vec();
        if let Some(id) = identity {
            segments.push(id.as_str());
        }
        let url = self.transport.url(&segments)?;
        let (method, policy) = if identity.is_some() {
            ("PATCH", RetryPolicy::Transient)
        } else {
            ("POST", RetryPolicy::RejectedOnly)
        };
        let label = format!("{method} {}", segments.join("/"));

        let body = self
            .transport
            .send(&label, policy, |client| {
                let form = multipart(parts, attachment)?;
                let request = if identity.is_some() {
                    client.patch(url.clone())
                } else {
                    client.post(url.clone())
                };
                Ok(request.bearer_auth(&token).multipart(form))
            })
            .await?;

        Ok(ack_from_body(&body, identity, &label))
    }
}

/// Text parts plus the optional image file part.
fn multipart(parts: &[(&'static str, String)], attachment: Option<&Attachment>) -> Result<Form> {
    let mut form = parts
        .iter()
        .fold(Form::new(), |form, (name, value)| form.text(*name, value.clone()));
    if let Some(file) = attachment {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| ApiError::config(format!("Invalid content type {:?}: {e}", file.content_type)))?;
        form = form.part(IMAGE_PART, part);
    }
    Ok(form)
}

/// Mutation bodies vary by endpoint; keep whatever id and message we find.
///
/// The save already succeeded, so an unreadable body only loses the id.
fn ack_from_body(body: &str, identity: Option<&Identity>, label: &str) -> Ack {
    let parsed = if body.trim().is_empty() {
        MutationBody::default()
    } else {
        serde_json::from_str::<MutationBody>(body).unwrap_or_else(|e| {
            log::warn!(
                "[api] {label}: unreadable acknowledgement ({e}): {}",
                truncate_for_log(body)
            );
            MutationBody::default()
        })
    };
    Ack {
        id: parsed
            .id
            .or_else(|| identity.map(ToString::to_string)),
        message: parsed.message,
    }
}
