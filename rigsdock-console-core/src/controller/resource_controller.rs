//! Generic controller implementation

use std::sync::Arc;

use futures::future::try_join;
use tokio::sync::Mutex;

use super::{ControllerSnapshot, FormSchema, Phase, Settlement, SubmitOutcome};
use crate::error::{CoreError, CoreResult};
use crate::traits::{CollectionFetcher, Mutator, ResourceFetcher};
use crate::types::{
    Attachment, CollectionFilter, FieldValue, Identity, ImagePreview, Submission, Violation,
};

const SUBMIT_FALLBACK: &str = "Something went wrong.";

/// Which action produced the current message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageOrigin {
    Fetch,
    Submission,
}

struct ControllerState<S: FormSchema> {
    identity: Option<Identity>,
    phase: Phase,
    fields: Option<S::Fields>,
    items: Arc<[S::Item]>,
    error_message: Option<String>,
    success_message: Option<String>,
    message_origin: Option<MessageOrigin>,
    pending_upload: Option<Attachment>,
    /// Bumped by every `initialize` and by `destroy`; settlements carrying an
    /// older value are stale.
    generation: u64,
    destroyed: bool,
}

impl<S: FormSchema> ControllerState<S> {
    fn new() -> Self {
        Self {
            identity: None,
            phase: Phase::Idle,
            fields: None,
            items: Arc::from(Vec::new()),
            error_message: None,
            success_message: None,
            message_origin: None,
            pending_upload: None,
            generation: 0,
            destroyed: false,
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.destroyed && self.generation == generation
    }

    fn fail(&mut self, origin: MessageOrigin, message: String) {
        self.phase = Phase::Failed;
        self.success_message = None;
        self.error_message = Some(message);
        self.message_origin = Some(origin);
    }

    fn succeed(&mut self, message: String) {
        self.phase = Phase::Succeeded;
        self.error_message = None;
        self.success_message = Some(message);
        self.message_origin = Some(MessageOrigin::Submission);
    }

    fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_origin = None;
    }

    /// Drop messages left by an earlier submission; fetch errors stay.
    fn clear_submission_messages(&mut self) {
        if self.message_origin == Some(MessageOrigin::Submission) {
            self.clear_messages();
        }
    }

    fn editable_fields(
        &mut self,
        action: &'static str,
        read_only: bool,
    ) -> CoreResult<&mut S::Fields> {
        if self.destroyed {
            return Err(CoreError::Destroyed);
        }
        if read_only {
            return Err(CoreError::ReadOnly);
        }
        let phase = self.phase;
        if !phase.accepts_edits() {
            return Err(CoreError::InvalidPhase { action, phase });
        }
        self.fields
            .as_mut()
            .ok_or(CoreError::InvalidPhase { action, phase })
    }
}

/// Lifecycle controller for one bound form or list.
///
/// Share it behind an `Arc`: `initialize` and `submit` take `&self` and may
/// overlap; the state lock is never held across a collaborator call.
pub struct ResourceController<S: FormSchema> {
    resource_fetcher: Option<Arc<dyn ResourceFetcher<S::Resource>>>,
    collection_fetcher: Option<Arc<dyn CollectionFetcher<S::Item>>>,
    collection_filter: Option<CollectionFilter>,
    mutator: Option<Arc<dyn Mutator<S::Fields>>>,
    state: Mutex<ControllerState<S>>,
}

impl<S: FormSchema> Default for ResourceController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> ResourceController<S> {
    /// Controller with no collaborators; it goes straight to `Ready`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resource_fetcher: None,
            collection_fetcher: None,
            collection_filter: None,
            mutator: None,
            state: Mutex::new(ControllerState::new()),
        }
    }

    /// Fetch the primary resource whenever an identity is bound.
    #[must_use]
    pub fn with_resource_fetcher(mut self, fetcher: Arc<dyn ResourceFetcher<S::Resource>>) -> Self {
        self.resource_fetcher = Some(fetcher);
        self
    }

    /// Fetch auxiliary items on every `initialize`.
    #[must_use]
    pub fn with_collection_fetcher(
        mut self,
        fetcher: Arc<dyn CollectionFetcher<S::Item>>,
        filter: Option<CollectionFilter>,
    ) -> Self {
        self.collection_fetcher = Some(fetcher);
        self.collection_filter = filter;
        self
    }

    /// Enable `submit`.
    #[must_use]
    pub fn with_mutator(mut self, mutator: Arc<dyn Mutator<S::Fields>>) -> Self {
        self.mutator = Some(mutator);
        self
    }

    fn needs_remote(&self, identity: Option<&Identity>) -> bool {
        (identity.is_some() && self.resource_fetcher.is_some()) || self.collection_fetcher.is_some()
    }

    /// Bind to `identity` and load whatever the screen needs.
    ///
    /// Resource and collection fetches run concurrently; the controller only
    /// reaches `Ready` once both succeed. A call superseded by a newer
    /// `initialize`, or outliving `destroy`, settles as `Discarded` and leaves
    /// the state untouched. After `destroy` every call settles as `Discarded`
    /// without fetching.
    pub async fn initialize(&self, identity: Option<Identity>) -> Settlement {
        let generation = {
            let mut state = self.state.lock().await;
            if state.destroyed {
                return Settlement::Discarded;
            }
            state.generation += 1;
            state.identity.clone_from(&identity);
            state.pending_upload = None;
            state.clear_messages();

            if !self.needs_remote(identity.as_ref()) {
                state.fields = Some(S::default_fields());
                state.items = Arc::from(Vec::new());
                state.phase = Phase::Ready;
                log::debug!("[{}] ready with defaults", S::NAME);
                return Settlement::Ready;
            }

            state.fields = None;
            state.items = Arc::from(Vec::new());
            state.phase = Phase::Loading;
            state.generation
        };

        log::debug!("[{}] loading {identity:?}", S::NAME);

        let resource = async {
            match (identity.as_ref(), self.resource_fetcher.as_ref()) {
                (Some(id), Some(fetcher)) => fetcher.fetch_by_identity(id).await.map(Some),
                _ => Ok(None),
            }
        };
        let items = async {
            match self.collection_fetcher.as_ref() {
                Some(fetcher) => fetcher
                    .fetch_collection(self.collection_filter.as_ref())
                    .await
                    .map(Some),
                None => Ok(None),
            }
        };
        let result = try_join(resource, items).await;

        let mut state = self.state.lock().await;
        if !state.is_current(generation) {
            log::debug!("[{}] discarding stale load for {identity:?}", S::NAME);
            return Settlement::Discarded;
        }

        match result {
            Ok((resource, items)) => {
                state.fields = Some(resource.map_or_else(S::default_fields, S::fields_from));
                state.items = Arc::from(items.unwrap_or_default());
                state.phase = Phase::Ready;
                log::info!("[{}] loaded {identity:?}", S::NAME);
                Settlement::Ready
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[{}] load failed for {identity:?}: {e}", S::NAME);
                } else {
                    log::error!("[{}] load failed for {identity:?}: {e}", S::NAME);
                }
                let message = e.reason().unwrap_or_else(S::fetch_fallback);
                state.fields = None;
                state.items = Arc::from(Vec::new());
                state.fail(MessageOrigin::Fetch, message.clone());
                Settlement::Failed(message)
            }
        }
    }

    /// Re-run `initialize` only if `identity` differs from the bound one.
    ///
    /// Returns `None` when nothing changed.
    pub async fn bind(&self, identity: Option<Identity>) -> Option<Settlement> {
        {
            let state = self.state.lock().await;
            if state.phase != Phase::Idle && state.identity == identity {
                return None;
            }
        }
        Some(self.initialize(identity).await)
    }

    /// Reload with the currently bound identity, e.g. after a fetch failure.
    pub async fn retry(&self) -> Settlement {
        let identity = self.state.lock().await.identity.clone();
        self.initialize(identity).await
    }

    /// Set one field by name.
    pub async fn update_field(&self, name: &str, value: FieldValue) -> CoreResult<()> {
        let mut state = self.state.lock().await;
        let fields = state.editable_fields("update a field", self.mutator.is_none())?;
        S::apply_field(fields, name, value)?;
        state.clear_submission_messages();
        Ok(())
    }

    /// Edit the typed fields in place.
    pub async fn edit<F>(&self, edit: F) -> CoreResult<()>
    where
        F: FnOnce(&mut S::Fields) + Send,
    {
        let mut state = self.state.lock().await;
        edit(state.editable_fields("edit fields", self.mutator.is_none())?);
        state.clear_submission_messages();
        Ok(())
    }

    /// Pick a new file for the image field.
    ///
    /// Returns the freshly minted local preview reference.
    pub async fn select_image(&self, attachment: Attachment) -> CoreResult<ImagePreview> {
        let mut state = self.state.lock().await;
        let fields = state.editable_fields("select an image", self.mutator.is_none())?;
        let slot = S::image_mut(fields).ok_or_else(|| CoreError::UnknownField("image".into()))?;
        let preview = ImagePreview::local();
        *slot = preview.clone();
        log::debug!(
            "[{}] selected {} ({} bytes)",
            S::NAME,
            attachment.file_name,
            attachment.bytes.len()
        );
        state.pending_upload = Some(attachment);
        state.clear_submission_messages();
        Ok(preview)
    }

    /// Validate the current fields without changing phase.
    pub async fn validate(&self) -> CoreResult<Vec<Violation>> {
        let state = self.state.lock().await;
        if state.destroyed {
            return Err(CoreError::Destroyed);
        }
        state
            .fields
            .as_ref()
            .map(S::validate)
            .ok_or(CoreError::InvalidPhase {
                action: "validate",
                phase: state.phase,
            })
    }

    /// Validate and send the fields to the mutation collaborator.
    ///
    /// Not reentrant: a call made while a submission is in flight returns
    /// `Ignored` without touching the network. Fails with `Destroyed` after
    /// `destroy`.
    pub async fn submit(&self) -> CoreResult<SubmitOutcome> {
        let (mutator, generation, identity, submission) = {
            let mut state = self.state.lock().await;
            if state.destroyed {
                return Err(CoreError::Destroyed);
            }
            let Some(mutator) = self.mutator.clone() else {
                return Err(CoreError::ReadOnly);
            };
            if !state.phase.accepts_edits() {
                log::debug!("[{}] submit ignored while {:?}", S::NAME, state.phase);
                return Ok(SubmitOutcome::Ignored);
            }
            let Some(fields) = state.fields.clone() else {
                return Ok(SubmitOutcome::Ignored);
            };

            state.clear_messages();
            let violations = S::validate(&fields);
            if !violations.is_empty() {
                log::debug!("[{}] {} violation(s)", S::NAME, violations.len());
                state.fail(MessageOrigin::Submission, Violation::join(&violations));
                return Ok(SubmitOutcome::Rejected(violations));
            }

            state.phase = Phase::Submitting;
            let submission = Submission {
                fields,
                attachment: state.pending_upload.clone(),
            };
            (mutator, state.generation, state.identity.clone(), submission)
        };

        log::info!(
            "[{}] submitting {identity:?} (attachment: {})",
            S::NAME,
            submission.attachment.is_some()
        );
        let result = mutator.mutate(identity.as_ref(), &submission).await;

        let mut state = self.state.lock().await;
        if !state.is_current(generation) {
            log::debug!("[{}] discarding stale submission for {identity:?}", S::NAME);
            return Ok(SubmitOutcome::Discarded);
        }

        match result {
            Ok(ack) => {
                let message = S::success_message(identity.is_some());
                let saved = ack
                    .id
                    .as_deref()
                    .or(identity.as_ref().map(Identity::as_str))
                    .unwrap_or("-");
                log::info!("[{}] saved {saved}", S::NAME);
                state.pending_upload = None;
                state.succeed(message.clone());
                Ok(SubmitOutcome::Succeeded(message))
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[{}] submission rejected: {e}", S::NAME);
                } else {
                    log::error!("[{}] submission failed: {e}", S::NAME);
                }
                let message = e.reason().unwrap_or_else(|| SUBMIT_FALLBACK.to_string());
                state.fail(MessageOrigin::Submission, message.clone());
                Ok(SubmitOutcome::Failed(message))
            }
        }
    }

    /// Unmount. Everything still in flight settles as a no-op.
    pub async fn destroy(&self) {
        let mut state = self.state.lock().await;
        if state.destroyed {
            return;
        }
        state.destroyed = true;
        state.generation += 1;
        state.pending_upload = None;
        log::debug!("[{}] destroyed", S::NAME);
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> ControllerSnapshot<S> {
        let state = self.state.lock().await;
        ControllerSnapshot {
            identity: state.identity.clone(),
            phase: state.phase,
            fields: state.fields.clone(),
            items: Arc::clone(&state.items),
            error_message: state.error_message.clone(),
            success_message: state.success_message.clone(),
            has_pending_upload: state.pending_upload.is_some(),
        }
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase
    }

    /// Loaded auxiliary items.
    pub async fn items(&self) -> Arc<[S::Item]> {
        Arc::clone(&self.state.lock().await.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::CategoryEditor;
    use crate::test_utils::{main_categories, shoes_category, MockCollection, MockFetcher, MockMutator};
    use crate::types::{Category, CategoryFields, MainCategory};

    struct Harness {
        categories: Arc<MockFetcher<Category>>,
        options: Arc<MockCollection<MainCategory>>,
        updates: Arc<MockMutator<CategoryFields>>,
        editor: Arc<ResourceController<CategoryEditor>>,
    }

    async fn harness() -> Harness {
        let categories = Arc::new(MockFetcher::new());
        categories.insert("cat-1", shoes_category()).await;
        let mut bags = shoes_category();
        bags.id = "cat-2".into();
        bags.name = "Bags".into();
        categories.insert("cat-2", bags).await;

        let options = Arc::new(MockCollection::new(main_categories()));
        let updates = Arc::new(MockMutator::new());
        let editor = Arc::new(CategoryEditor::controller(
            categories.clone(),
            options.clone(),
            updates.clone(),
        ));
        Harness {
            categories,
            options,
            updates,
            editor,
        }
    }

    async fn wait_for(calls: impl Fn() -> usize, n: usize) {
        while calls() < n {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn rename_and_save() {
        let h = harness().await;
        assert_eq!(h.editor.phase().await, Phase::Idle);
        h.editor.initialize(Some(Identity::new("cat-1"))).await;

        h.editor
            .update_field("name", FieldValue::Text("Sneakers".into()))
            .await
            .unwrap();
        let outcome = h.editor.submit().await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded("Category updated successfully!".into())
        );

        let (identity, sent) = h.updates.last().await.unwrap();
        assert_eq!(identity, Some(Identity::new("cat-1")));
        assert_eq!(sent.fields.name, "Sneakers");
        assert_eq!(sent.fields.description, "Footwear");
        assert_eq!(sent.fields.selected_main_category.as_deref(), Some("main-9"));
        assert!(sent.fields.is_active);
        assert!(sent.attachment.is_none());

        let snap = h.editor.snapshot().await;
        assert_eq!(snap.phase, Phase::Succeeded);
        assert_eq!(snap.fields, Some(sent.fields));
        assert_eq!(snap.error_message, None);
        assert_eq!(
            snap.success_message.as_deref(),
            Some("Category updated successfully!")
        );
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        let h = harness().await;
        h.editor.initialize(Some(Identity::new("cat-1"))).await;
        let gate = h.updates.hold().await;

        let first = tokio::spawn({
            let editor = Arc::clone(&h.editor);
            async move { editor.submit().await }
        });
        wait_for(|| h.updates.calls(), 1).await;
        assert_eq!(h.editor.phase().await, Phase::Submitting);

        assert_eq!(h.editor.submit().await.unwrap(), SubmitOutcome::Ignored);
        assert!(matches!(
            h.editor.update_field("name", FieldValue::Text("x".into())).await,
            Err(CoreError::InvalidPhase { phase: Phase::Submitting, .. })
        ));

        gate.notify_one();
        let outcome = first.await.unwrap().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Succeeded(_)));
        assert_eq!(h.updates.calls(), 1);
    }

    #[tokio::test]
    async fn superseded_load_is_discarded() {
        let h = harness().await;
        let gate = h.categories.hold("cat-1").await;

        let stale = tokio::spawn({
            let editor = Arc::clone(&h.editor);
            async move { editor.initialize(Some(Identity::new("cat-1"))).await }
        });
        wait_for(|| h.categories.calls(), 1).await;
        assert_eq!(h.editor.phase().await, Phase::Loading);

        let fresh = h.editor.initialize(Some(Identity::new("cat-2"))).await;
        assert_eq!(fresh, Settlement::Ready);

        gate.notify_one();
        assert_eq!(stale.await.unwrap(), Settlement::Discarded);

        let snap = h.editor.snapshot().await;
        assert_eq!(snap.identity, Some(Identity::new("cat-2")));
        assert_eq!(snap.fields.map(|f| f.name), Some("Bags".to_string()));
        assert_eq!(h.options.calls(), 2);
    }

    #[tokio::test]
    async fn failed_submit_keeps_edits_and_upload() {
        let h = harness().await;
        h.editor.initialize(Some(Identity::new("cat-1"))).await;
        h.updates
            .set_error(Some(CoreError::ApiError {
                status: 409,
                message: Some("Category name already taken".into()),
            }))
            .await;

        h.editor
            .update_field("name", FieldValue::Text("Boots".into()))
            .await
            .unwrap();
        h.editor
            .select_image(Attachment::new("boots.png", "image/png", vec![7; 16]))
            .await
            .unwrap();
        let before = h.editor.snapshot().await.fields;

        let outcome = h.editor.submit().await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Failed("Category name already taken".into())
        );

        let snap = h.editor.snapshot().await;
        assert_eq!(snap.phase, Phase::Failed);
        assert_eq!(snap.fields, before);
        assert!(snap.has_pending_upload);
        assert_eq!(snap.success_message, None);

        // Retrying sends the same file again.
        h.updates.set_error(None).await;
        h.editor.submit().await.unwrap();
        let (_, sent) = h.updates.last().await.unwrap();
        assert_eq!(sent.attachment.map(|a| a.file_name).as_deref(), Some("boots.png"));
        assert!(!h.editor.snapshot().await.has_pending_upload);
    }

    #[tokio::test]
    async fn failure_without_reason_uses_fallback() {
        let h = harness().await;
        h.editor.initialize(Some(Identity::new("cat-1"))).await;
        h.updates
            .set_error(Some(CoreError::ApiError {
                status: 500,
                message: None,
            }))
            .await;

        let outcome = h.editor.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed("Something went wrong.".into()));
    }

    #[tokio::test]
    async fn editing_clears_submission_messages_only() {
        let h = harness().await;
        h.editor.initialize(Some(Identity::new("cat-1"))).await;
        h.editor
            .update_field("description", FieldValue::Text(" ".into()))
            .await
            .unwrap();
        assert!(matches!(
            h.editor.submit().await.unwrap(),
            SubmitOutcome::Rejected(_)
        ));
        assert_eq!(
            h.editor.snapshot().await.error_message.as_deref(),
            Some("Description is required.")
        );

        h.editor
            .update_field("description", FieldValue::Text("Footwear".into()))
            .await
            .unwrap();
        assert_eq!(h.editor.snapshot().await.error_message, None);
        assert_eq!(h.editor.validate().await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn fetch_failure_then_retry() {
        let h = harness().await;
        h.categories
            .set_error(Some(CoreError::ApiError {
                status: 502,
                message: None,
            }))
            .await;

        let settled = h.editor.initialize(Some(Identity::new("cat-1"))).await;
        assert_eq!(settled, Settlement::Failed("Error fetching data".into()));
        assert!(matches!(
            h.editor.update_field("name", FieldValue::Text("x".into())).await,
            Err(CoreError::InvalidPhase { .. })
        ));
        assert_eq!(h.editor.submit().await.unwrap(), SubmitOutcome::Ignored);
        assert_eq!(h.updates.calls(), 0);

        h.categories.set_error(None).await;
        assert_eq!(h.editor.retry().await, Settlement::Ready);
        assert_eq!(h.editor.snapshot().await.error_message, None);
    }

    #[tokio::test]
    async fn destroy_silences_in_flight_work() {
        let h = harness().await;
        let gate = h.categories.hold("cat-1").await;

        let load = tokio::spawn({
            let editor = Arc::clone(&h.editor);
            async move { editor.initialize(Some(Identity::new("cat-1"))).await }
        });
        wait_for(|| h.categories.calls(), 1).await;

        h.editor.destroy().await;
        gate.notify_one();
        assert_eq!(load.await.unwrap(), Settlement::Discarded);
        assert_eq!(h.editor.phase().await, Phase::Loading);

    }

    #[tokio::test]
    async fn every_action_after_destroy_is_rejected() {
        let h = harness().await;
        h.editor.initialize(Some(Identity::new("cat-1"))).await;
        h.editor.destroy().await;

        assert_eq!(
            h.editor.initialize(Some(Identity::new("cat-2"))).await,
            Settlement::Discarded
        );
        assert_eq!(h.editor.retry().await, Settlement::Discarded);
        assert_eq!(h.categories.calls(), 1);

        assert!(matches!(
            h.editor
                .update_field("name", FieldValue::Text("Boots".into()))
                .await,
            Err(CoreError::Destroyed)
        ));
        assert!(matches!(
            h.editor.edit(|f| f.name.clear()).await,
            Err(CoreError::Destroyed)
        ));
        assert!(matches!(
            h.editor
                .select_image(Attachment::new("a.png", "image/png", Vec::new()))
                .await,
            Err(CoreError::Destroyed)
        ));
        assert!(matches!(h.editor.validate().await, Err(CoreError::Destroyed)));
        assert!(matches!(h.editor.submit().await, Err(CoreError::Destroyed)));
        assert_eq!(h.updates.calls(), 0);
        assert_eq!(
            h.editor.snapshot().await.fields.map(|f| f.name).as_deref(),
            Some("Shoes")
        );
    }

    #[tokio::test]
    async fn destroy_during_submit_discards_result() {
        let h = harness().await;
        h.editor.initialize(Some(Identity::new("cat-1"))).await;
        let gate = h.updates.hold().await;

        let submit = tokio::spawn({
            let editor = Arc::clone(&h.editor);
            async move { editor.submit().await }
        });
        wait_for(|| h.updates.calls(), 1).await;
        h.editor.destroy().await;
        gate.notify_one();

        assert_eq!(submit.await.unwrap().unwrap(), SubmitOutcome::Discarded);
        assert_eq!(h.editor.snapshot().await.success_message, None);
    }

    #[tokio::test]
    async fn bind_skips_unchanged_identity() {
        let h = harness().await;
        assert_eq!(
            h.editor.bind(Some(Identity::new("cat-1"))).await,
            Some(Settlement::Ready)
        );
        assert_eq!(h.editor.bind(Some(Identity::new("cat-1"))).await, None);
        assert_eq!(h.categories.calls(), 1);

        assert!(h.editor.bind(Some(Identity::new("cat-2"))).await.is_some());
        assert_eq!(h.categories.calls(), 2);
    }

    #[tokio::test]
    async fn identity_change_drops_pending_upload() {
        let h = harness().await;
        h.editor.initialize(Some(Identity::new("cat-1"))).await;
        h.editor
            .select_image(Attachment::new("a.png", "image/png", vec![1]))
            .await
            .unwrap();
        assert!(h.editor.snapshot().await.has_pending_upload);

        h.editor.initialize(Some(Identity::new("cat-2"))).await;
        let snap = h.editor.snapshot().await;
        assert!(!snap.has_pending_upload);
        assert_eq!(snap.fields.map(|f| f.image), Some(ImagePreview::None));
    }

    #[tokio::test]
    async fn no_collaborators_is_ready_with_defaults() {
        let controller: ResourceController<CategoryEditor> = ResourceController::new();
        assert_eq!(controller.initialize(None).await, Settlement::Ready);
        assert_eq!(
            controller.snapshot().await.fields,
            Some(CategoryFields::default())
        );
        assert!(matches!(controller.submit().await, Err(CoreError::ReadOnly)));
    }

    #[tokio::test]
    async fn without_mutator_fields_cannot_change() {
        let controller: ResourceController<CategoryEditor> = ResourceController::new();
        controller.initialize(None).await;

        assert!(matches!(
            controller.edit(|f| f.name = "Boots".into()).await,
            Err(CoreError::ReadOnly)
        ));
        assert!(matches!(
            controller
                .update_field("name", FieldValue::Text("Boots".into()))
                .await,
            Err(CoreError::ReadOnly)
        ));
        assert!(matches!(
            controller
                .select_image(Attachment::new("a.png", "image/png", vec![1]))
                .await,
            Err(CoreError::ReadOnly)
        ));
        assert_eq!(
            controller.snapshot().await.fields,
            Some(CategoryFields::default())
        );
    }
}
