//! Vendor order type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order placed with a vendor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub order_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl VendorOrder {
    /// Sum of `price * quantity` over all line items.
    #[must_use]
    pub fn item_subtotal(&self) -> f64 {
        self.items.iter().map(OrderLineItem::line_total).sum()
    }
}

/// One product line of an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

impl OrderLineItem {
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub phone: String,
}
