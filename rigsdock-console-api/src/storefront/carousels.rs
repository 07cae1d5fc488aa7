use async_trait::async_trait;
use rigsdock_console_core::types::{
    Ack, CarouselFields, CarouselItem, CollectionFilter, Identity, Submission,
};
use rigsdock_console_core::{CollectionFetcher, CoreResult, Mutator};

use super::StorefrontApi;
use crate::types::CarouselsEnvelope;

#[async_trait]
impl CollectionFetcher<CarouselItem> for StorefrontApi {
    async fn fetch_collection(
        &self,
        _filter: Option<&CollectionFilter>,
    ) -> CoreResult<Vec<CarouselItem>> {
        let envelope: CarouselsEnvelope = self.get(&["admin", "carousel"], &[]).await?;
        Ok(envelope.carousels)
    }
}

#[async_trait]
impl Mutator<CarouselFields> for StorefrontApi {
    async fn mutate(
        &self,
        identity: Option<&Identity>,
        submission: &Submission<CarouselFields>,
    ) -> CoreResult<Ack> {
        self.save_multipart(
            &["admin", "carousel"],
            identity,
            &submission.fields.form_parts(),
            submission.attachment.as_ref(),
        )
        .await
    }
}
