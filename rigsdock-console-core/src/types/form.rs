//! Form-level value types shared by every controller

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque key of the remote resource a controller is bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Value written into a form field by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text input
    Text(String),
    /// Toggle / checkbox
    Flag(bool),
    /// Select box; `None` clears the selection
    Choice(Option<String>),
}

impl FieldValue {
    pub fn into_text(self, field: &str) -> crate::CoreResult<String> {
        match self {
            Self::Text(text) => Ok(text),
            _ => Err(Self::mismatch(field, "text")),
        }
    }

    pub fn into_flag(self, field: &str) -> crate::CoreResult<bool> {
        match self {
            Self::Flag(flag) => Ok(flag),
            _ => Err(Self::mismatch(field, "a flag")),
        }
    }

    pub fn into_choice(self, field: &str) -> crate::CoreResult<Option<String>> {
        match self {
            Self::Choice(choice) => Ok(choice.filter(|c| !c.is_empty())),
            _ => Err(Self::mismatch(field, "a choice")),
        }
    }

    fn mismatch(field: &str, expected: &'static str) -> crate::CoreError {
        crate::CoreError::FieldType {
            field: field.to_string(),
            expected,
        }
    }
}

/// What an image field currently displays.
///
/// Only a `Local` preview stands for a file picked in this session; a
/// `Remote` URL is never uploaded again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum ImagePreview {
    #[default]
    None,
    /// URL of an image already stored by the backend
    Remote(String),
    /// Object URL minted for a newly selected file
    Local(String),
}

impl ImagePreview {
    /// Mint a fresh local preview reference.
    #[must_use]
    pub fn local() -> Self {
        Self::Local(format!("blob:{}", uuid::Uuid::new_v4()))
    }

    /// Build a preview from an optional backend URL.
    #[must_use]
    pub fn from_remote(url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => Self::Remote(url),
            _ => Self::None,
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Remote(url) | Self::Local(url) => Some(url),
        }
    }
}

/// A file picked for upload
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    #[must_use]
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Mutation payload handed to a [`Mutator`](crate::traits::Mutator)
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    /// Field values exactly as they stood when `submit` was called
    pub fields: F,
    /// Binary file picked in this session, if any
    pub attachment: Option<Attachment>,
}

/// Acknowledgement returned by a successful mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// ID of the created or updated resource, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// "`<label>` is required."
    #[must_use]
    pub fn required(field: &'static str, label: &str) -> Self {
        Self::new(field, format!("{label} is required."))
    }

    /// Join violation messages into one user-facing sentence list.
    #[must_use]
    pub fn join(violations: &[Self]) -> String {
        violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Query filter passed to collection fetches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionFilter {
    params: Vec<(String, String)>,
}

impl CollectionFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
