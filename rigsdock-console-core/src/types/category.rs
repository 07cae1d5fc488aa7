//! Category related type definitions

use serde::{Deserialize, Serialize};

use super::ImagePreview;

/// Category as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// ID of the parent main category
    #[serde(default, rename = "maincategory")]
    pub main_category: Option<String>,
    #[serde(default)]
    pub status: CategoryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Main category, used as a select option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Category visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Active,
    #[default]
    #[serde(other)]
    Inactive,
}

impl CategoryStatus {
    #[must_use]
    pub fn from_active(is_active: bool) -> Self {
        if is_active {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Editable fields of the category editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFields {
    pub name: String,
    pub description: String,
    pub selected_main_category: Option<String>,
    pub is_active: bool,
    pub image: ImagePreview,
}

impl From<Category> for CategoryFields {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            description: category.description,
            selected_main_category: category.main_category.filter(|id| !id.is_empty()),
            is_active: category.status == CategoryStatus::Active,
            image: ImagePreview::from_remote(category.image_url),
        }
    }
}
