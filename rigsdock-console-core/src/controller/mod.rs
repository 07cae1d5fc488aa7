//! Resource form/list controller
//!
//! One generic lifecycle (`Idle → Loading → Ready/Failed`, then
//! `Submitting → Succeeded/Failed`) shared by every console screen. Each
//! screen plugs in a [`FormSchema`] describing its typed fields, how they are
//! seeded from the fetched resource, and what makes them valid.

mod resource_controller;

pub use resource_controller::ResourceController;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::CoreResult;
use crate::types::{FieldValue, Identity, ImagePreview, Violation};

/// Controller lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Submitting,
    Succeeded,
    Failed,
}

impl Phase {
    /// Whether fields may be edited and a submission started
    #[must_use]
    pub fn accepts_edits(self) -> bool {
        matches!(self, Self::Ready | Self::Failed | Self::Succeeded)
    }
}

/// Per-screen specialization of the controller
pub trait FormSchema: Send + Sync + 'static {
    /// Primary resource fetched by identity
    type Resource: Send + 'static;
    /// Auxiliary read-only item (select options, list rows)
    type Item: Send + Sync + 'static;
    /// Typed editable fields
    type Fields: Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Short name used in log lines
    const NAME: &'static str;

    /// Seed fields from a fetched resource.
    fn fields_from(resource: Self::Resource) -> Self::Fields;

    /// Fields used when there is no resource to seed from.
    fn default_fields() -> Self::Fields {
        Self::Fields::default()
    }

    /// Ordered field-level violations; empty when valid.
    fn validate(fields: &Self::Fields) -> Vec<Violation>;

    /// Write one field by name.
    fn apply_field(fields: &mut Self::Fields, name: &str, value: FieldValue) -> CoreResult<()>;

    /// The image field, for forms that have one.
    fn image_mut(_fields: &mut Self::Fields) -> Option<&mut ImagePreview> {
        None
    }

    /// Message shown when a load fails without a reason.
    fn fetch_fallback() -> String {
        "Error fetching data".to_string()
    }

    /// Message shown after a successful submission.
    fn success_message(_is_update: bool) -> String {
        "Saved successfully!".to_string()
    }
}

/// How an `initialize` call settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Ready,
    Failed(String),
    /// Superseded by a newer `initialize`, or the controller was destroyed
    Discarded,
}

/// How a `submit` call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to do: already submitting or fields not loaded
    Ignored,
    /// Local validation failed; no network call was made
    Rejected(Vec<Violation>),
    Succeeded(String),
    Failed(String),
    /// Superseded while in flight
    Discarded,
}

/// Read-only copy of a controller's state for the presentation layer
pub struct ControllerSnapshot<S: FormSchema> {
    pub identity: Option<Identity>,
    pub phase: Phase,
    /// `None` until the controller has left `Loading`
    pub fields: Option<S::Fields>,
    pub items: Arc<[S::Item]>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    /// A newly selected file is waiting to be uploaded
    pub has_pending_upload: bool,
}

impl<S: FormSchema> Clone for ControllerSnapshot<S> {
    fn clone(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            phase: self.phase,
            fields: self.fields.clone(),
            items: Arc::clone(&self.items),
            error_message: self.error_message.clone(),
            success_message: self.success_message.clone(),
            has_pending_upload: self.has_pending_upload,
        }
    }
}

impl<S: FormSchema> fmt::Debug for ControllerSnapshot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerSnapshot")
            .field("identity", &self.identity)
            .field("phase", &self.phase)
            .field("fields", &self.fields)
            .field("items", &self.items.len())
            .field("error_message", &self.error_message)
            .field("success_message", &self.success_message)
            .field("has_pending_upload", &self.has_pending_upload)
            .finish()
    }
}
