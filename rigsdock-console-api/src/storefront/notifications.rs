use async_trait::async_trait;
use rigsdock_console_core::types::{CollectionFilter, VendorNotification};
use rigsdock_console_core::{CollectionFetcher, CoreResult};

use super::StorefrontApi;
use crate::types::NotificationsBody;

#[async_trait]
impl CollectionFetcher<VendorNotification> for StorefrontApi {
    async fn fetch_collection(
        &self,
        filter: Option<&CollectionFilter>,
    ) -> CoreResult<Vec<VendorNotification>> {
        let query = filter.map(|f| f.params().to_vec()).unwrap_or_default();
        let body: NotificationsBody = self.get(&["vendor", "notifications"], &query).await?;
        Ok(body.into_vec())
    }
}
