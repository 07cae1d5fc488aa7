//! Vendor notification feed

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::controller::{FormSchema, ResourceController};
use crate::error::{CoreError, CoreResult};
use crate::session::SessionContext;
use crate::traits::CollectionFetcher;
use crate::types::{CollectionFilter, FieldValue, VendorNotification, Violation};
use crate::utils::datetime::relative_label;

/// Query key carrying the vendor id
pub const VENDOR_FILTER: &str = "vendorId";

/// Notification plus its display age
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub notification: VendorNotification,
    /// e.g. "5 minutes ago"
    pub age: String,
}

/// Notifications addressed to the signed-in vendor.
pub struct NotificationFeed;

impl NotificationFeed {
    /// Controller filtered by the vendor in `session`.
    ///
    /// Fails with `NotSignedIn` unless a vendor session is established.
    pub async fn controller(
        notifications: Arc<dyn CollectionFetcher<VendorNotification>>,
        session: &SessionContext,
    ) -> CoreResult<ResourceController<Self>> {
        let vendor_id = session.vendor_id().await?;
        let filter = CollectionFilter::new().with(VENDOR_FILTER, vendor_id);
        Ok(ResourceController::new().with_collection_fetcher(notifications, Some(filter)))
    }

    /// Feed rows with ages relative to `now`.
    #[must_use]
    pub fn entries(items: &[VendorNotification], now: DateTime<Utc>) -> Vec<FeedEntry> {
        items
            .iter()
            .map(|notification| FeedEntry {
                age: relative_label(notification.created_at, now),
                notification: notification.clone(),
            })
            .collect()
    }
}

impl FormSchema for NotificationFeed {
    type Resource = ();
    type Item = VendorNotification;
    type Fields = ();

    const NAME: &'static str = "notification-feed";

    fn fields_from(_resource: ()) {}

    fn validate(_fields: &()) -> Vec<Violation> {
        Vec::new()
    }

    fn apply_field(_fields: &mut (), name: &str, _value: FieldValue) -> CoreResult<()> {
        Err(CoreError::UnknownField(name.to_string()))
    }
}
