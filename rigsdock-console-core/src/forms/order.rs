//! Vendor order details (read-only)

use std::sync::Arc;

use crate::controller::{FormSchema, ResourceController};
use crate::error::{CoreError, CoreResult};
use crate::traits::ResourceFetcher;
use crate::types::{FieldValue, VendorOrder, Violation};

/// What the order details screen displays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderView {
    pub order: VendorOrder,
    /// Sum over line items, shown next to the backend's total
    pub item_subtotal: f64,
}

impl From<VendorOrder> for OrderView {
    fn from(order: VendorOrder) -> Self {
        Self {
            item_subtotal: order.item_subtotal(),
            order,
        }
    }
}

pub struct OrderDetails;

impl OrderDetails {
    /// Controller without a mutator; `submit` reports `ReadOnly`.
    pub fn controller(orders: Arc<dyn ResourceFetcher<VendorOrder>>) -> ResourceController<Self> {
        ResourceController::new().with_resource_fetcher(orders)
    }
}

impl FormSchema for OrderDetails {
    type Resource = VendorOrder;
    type Item = ();
    type Fields = OrderView;

    const NAME: &'static str = "order-details";

    fn fields_from(order: VendorOrder) -> OrderView {
        order.into()
    }

    fn validate(_fields: &OrderView) -> Vec<Violation> {
        Vec::new()
    }

    fn apply_field(_fields: &mut OrderView, _name: &str, _value: FieldValue) -> CoreResult<()> {
        Err(CoreError::ReadOnly)
    }

    fn fetch_fallback() -> String {
        "Failed to fetch order details".to_string()
    }
}
