//! Carousel banner type definitions

use serde::{Deserialize, Serialize};

use super::ImagePreview;

/// Carousel banner as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    /// Stored image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Editable fields of the carousel editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselFields {
    pub title: String,
    pub link: String,
    pub image: ImagePreview,
}

impl From<CarouselItem> for CarouselFields {
    fn from(item: CarouselItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            image: ImagePreview::from_remote(item.image),
        }
    }
}
