//! Wire envelopes of the storefront backend

use rigsdock_console_core::types::{CarouselItem, Category, MainCategory, VendorNotification};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryEnvelope {
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainCategoriesEnvelope {
    #[serde(rename = "mainCategories", default)]
    pub main_categories: Vec<MainCategory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CarouselsEnvelope {
    #[serde(default)]
    pub carousels: Vec<CarouselItem>,
}

/// The feed endpoint answers either a bare array or `{ notifications }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum NotificationsBody {
    List(Vec<VendorNotification>),
    Envelope { notifications: Vec<VendorNotification> },
}

impl NotificationsBody {
    pub fn into_vec(self) -> Vec<VendorNotification> {
        match self {
            Self::List(items) | Self::Envelope { notifications: items } => items,
        }
    }
}

/// `POST /admin/login` and `POST /vendor/login` request body
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub admin: Option<AdminProfile>,
    #[serde(default)]
    pub vendor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdminProfile {
    #[serde(alias = "_id")]
    pub id: String,
}

/// Loose shape of a mutation response
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MutationBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
}
