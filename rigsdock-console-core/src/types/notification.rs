//! Vendor notification type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification shown in the vendor feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorNotification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, rename = "ownerId", skip_serializing_if = "Option::is_none")]
    pub owner: Option<NotificationOwner>,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

impl VendorNotification {
    /// Owner display name, empty when the backend did not populate it
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map_or("", |o| o.owner_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOwner {
    #[serde(default, rename = "ownername")]
    pub owner_name: String,
}
