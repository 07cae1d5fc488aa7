use async_trait::async_trait;
use rigsdock_console_core::types::{Identity, VendorOrder};
use rigsdock_console_core::{CoreResult, ResourceFetcher};

use super::StorefrontApi;

#[async_trait]
impl ResourceFetcher<VendorOrder> for StorefrontApi {
    async fn fetch_by_identity(&self, identity: &Identity) -> CoreResult<VendorOrder> {
        self.get(&["vendor", "order", identity.as_str()], &[]).await
    }
}
