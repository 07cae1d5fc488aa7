use async_trait::async_trait;
use rigsdock_console_core::types::{
    Ack, Category, CategoryFields, CollectionFilter, Identity, MainCategory, Submission,
};
use rigsdock_console_core::{CollectionFetcher, CoreError, CoreResult, Mutator, ResourceFetcher};

use super::StorefrontApi;
use crate::types::{CategoryEnvelope, MainCategoriesEnvelope};

#[async_trait]
impl ResourceFetcher<Category> for StorefrontApi {
    async fn fetch_by_identity(&self, identity: &Identity) -> CoreResult<Category> {
        let envelope: CategoryEnvelope = self
            .get(&["admin", "category", identity.as_str()], &[])
            .await?;
        Ok(envelope.category)
    }
}

#[async_trait]
impl CollectionFetcher<MainCategory> for StorefrontApi {
    async fn fetch_collection(
        &self,
        _filter: Option<&CollectionFilter>,
    ) -> CoreResult<Vec<MainCategory>> {
        let envelope: MainCategoriesEnvelope = self.get(&["admin", "maincategory"], &[]).await?;
        Ok(envelope.main_categories)
    }
}

#[async_trait]
impl Mutator<CategoryFields> for StorefrontApi {
    async fn mutate(
        &self,
        identity: Option<&Identity>,
        submission: &Submission<CategoryFields>,
    ) -> CoreResult<Ack> {
        let Some(identity) = identity else {
            return Err(CoreError::ValidationError(
                "Categories can only be updated here".to_string(),
            ));
        };
        self.save_multipart(
            &["admin", "category"],
            Some(identity),
            &submission.fields.form_parts(),
            submission.attachment.as_ref(),
        )
        .await
    }
}
