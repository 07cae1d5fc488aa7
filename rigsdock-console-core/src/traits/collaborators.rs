//! Data-access collaborator traits

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Ack, CollectionFilter, Identity, Submission};

/// Fetch one resource by identity
///
/// Implementations:
/// - `StorefrontApi` (REST backend)
/// - `LoadedCarouselLookup` (resolve against an already fetched list)
#[async_trait]
pub trait ResourceFetcher<R: Send + 'static>: Send + Sync {
    /// Retrieve the resource's current field values
    ///
    /// # Arguments
    /// * `identity` - Resource key
    async fn fetch_by_identity(&self, identity: &Identity) -> CoreResult<R>;
}

/// Fetch auxiliary read-only items (option lists, feeds)
#[async_trait]
pub trait CollectionFetcher<I: Send + 'static>: Send + Sync {
    /// Retrieve all items matching the optional filter
    ///
    /// # Arguments
    /// * `filter` - Query parameters, if the list is scoped
    async fn fetch_collection(&self, filter: Option<&CollectionFilter>) -> CoreResult<Vec<I>>;
}

/// Create or update a resource
///
/// Must be safe under concurrent independent calls from different
/// controller instances.
#[async_trait]
pub trait Mutator<F: Send + Sync + 'static>: Send + Sync {
    /// Apply a submission
    ///
    /// # Arguments
    /// * `identity` - `None` creates, `Some` updates
    /// * `submission` - Field values plus an optional newly selected file
    async fn mutate(&self, identity: Option<&Identity>, submission: &Submission<F>)
        -> CoreResult<Ack>;
}
