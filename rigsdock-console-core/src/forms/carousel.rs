//! Carousel banners: list board, editor, and the board's editor slot

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::controller::{ControllerSnapshot, FormSchema, ResourceController, Settlement, SubmitOutcome};
use crate::editing::{EditingTarget, EditorSlot};
use crate::error::{CoreError, CoreResult};
use crate::traits::{CollectionFetcher, Mutator, ResourceFetcher};
use crate::types::{CarouselFields, CarouselItem, FieldValue, Identity, ImagePreview, Violation};

/// Create or update one carousel banner.
pub struct CarouselEditor;

impl CarouselEditor {
    pub fn controller(
        items: Arc<dyn ResourceFetcher<CarouselItem>>,
        saves: Arc<dyn Mutator<CarouselFields>>,
    ) -> ResourceController<Self> {
        ResourceController::new()
            .with_resource_fetcher(items)
            .with_mutator(saves)
    }
}

impl FormSchema for CarouselEditor {
    type Resource = CarouselItem;
    type Item = ();
    type Fields = CarouselFields;

    const NAME: &'static str = "carousel-editor";

    fn fields_from(item: CarouselItem) -> CarouselFields {
        item.into()
    }

    fn validate(fields: &CarouselFields) -> Vec<Violation> {
        let mut violations = Vec::new();
        if fields.title.trim().is_empty() {
            violations.push(Violation::required("title", "Title"));
        }
        if fields.link.trim().is_empty() {
            violations.push(Violation::required("link", "Link"));
        }
        if !fields.image.is_present() {
            violations.push(Violation::required("image", "Image"));
        }
        violations
    }

    fn apply_field(fields: &mut CarouselFields, name: &str, value: FieldValue) -> CoreResult<()> {
        match name {
            "title" => fields.title = value.into_text(name)?,
            "link" => fields.link = value.into_text(name)?,
            _ => return Err(CoreError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn image_mut(fields: &mut CarouselFields) -> Option<&mut ImagePreview> {
        Some(&mut fields.image)
    }

    fn success_message(is_update: bool) -> String {
        if is_update {
            "Carousel item updated".to_string()
        } else {
            "Carousel item added".to_string()
        }
    }
}

impl CarouselFields {
    /// Text parts of the multipart save, in wire naming.
    #[must_use]
    pub fn form_parts(&self) -> Vec<(&'static str, String)> {
        vec![("title", self.title.clone()), ("link", self.link.clone())]
    }
}

/// All carousel banners, read-only.
pub struct CarouselList;

impl FormSchema for CarouselList {
    type Resource = ();
    type Item = CarouselItem;
    type Fields = ();

    const NAME: &'static str = "carousel-list";

    fn fields_from(_resource: ()) {}

    fn validate(_fields: &()) -> Vec<Violation> {
        Vec::new()
    }

    fn apply_field(_fields: &mut (), name: &str, _value: FieldValue) -> CoreResult<()> {
        Err(CoreError::UnknownField(name.to_string()))
    }
}

/// Seeds an editor from the rows the board already loaded.
pub struct LoadedCarouselLookup {
    items: Arc<[CarouselItem]>,
}

impl LoadedCarouselLookup {
    #[must_use]
    pub fn new(items: Arc<[CarouselItem]>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ResourceFetcher<CarouselItem> for LoadedCarouselLookup {
    async fn fetch_by_identity(&self, identity: &Identity) -> CoreResult<CarouselItem> {
        self.items
            .iter()
            .find(|item| item.id == identity.as_str())
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("carousel item {identity}")))
    }
}

#[derive(Default)]
struct BoardState {
    slot: EditorSlot,
    editor: Option<Arc<ResourceController<CarouselEditor>>>,
}

/// Carousel list plus the editor it owns.
///
/// The board decides what the editor works on; after a successful save it
/// closes the editor and reloads the list.
pub struct CarouselBoard {
    list: ResourceController<CarouselList>,
    saves: Arc<dyn Mutator<CarouselFields>>,
    state: Mutex<BoardState>,
}

impl CarouselBoard {
    pub fn new(
        items: Arc<dyn CollectionFetcher<CarouselItem>>,
        saves: Arc<dyn Mutator<CarouselFields>>,
    ) -> Self {
        Self {
            list: ResourceController::new().with_collection_fetcher(items, None),
            saves,
            state: Mutex::new(BoardState::default()),
        }
    }

    /// Load the banner list.
    pub async fn initialize(&self) -> Settlement {
        self.list.initialize(None).await
    }

    pub async fn reload(&self) -> Settlement {
        self.list.retry().await
    }

    pub async fn list(&self) -> ControllerSnapshot<CarouselList> {
        self.list.snapshot().await
    }

    /// Open an empty editor for a new banner.
    pub async fn open_create(&self) -> Arc<ResourceController<CarouselEditor>> {
        self.open(EditingTarget::Create).await
    }

    /// Open the editor on a banner from the loaded list.
    pub async fn open_edit(&self, id: Identity) -> Arc<ResourceController<CarouselEditor>> {
        self.open(EditingTarget::Edit(id)).await
    }

    async fn open(&self, target: EditingTarget) -> Arc<ResourceController<CarouselEditor>> {
        let lookup = Arc::new(LoadedCarouselLookup::new(self.list.items().await));
        let editor = Arc::new(CarouselEditor::controller(lookup, Arc::clone(&self.saves)));
        let identity = target.identity().cloned();

        let previous = {
            let mut state = self.state.lock().await;
            state.slot.open(target);
            state.editor.replace(Arc::clone(&editor))
        };
        if let Some(previous) = previous {
            previous.destroy().await;
        }

        editor.initialize(identity).await;
        editor
    }

    /// The open editor, if any.
    pub async fn editor(&self) -> Option<Arc<ResourceController<CarouselEditor>>> {
        self.state.lock().await.editor.clone()
    }

    pub async fn target(&self) -> Option<EditingTarget> {
        self.state.lock().await.slot.target().cloned()
    }

    /// Close the editor without saving.
    pub async fn close(&self) {
        let editor = {
            let mut state = self.state.lock().await;
            state.slot.close();
            state.editor.take()
        };
        if let Some(editor) = editor {
            editor.destroy().await;
        }
    }

    /// Submit the open editor.
    ///
    /// On success the editor is closed and the list reloaded; on any other
    /// outcome the editor stays open with its fields intact.
    /// An editor closed while the save was starting reports `Discarded`.
    pub async fn save_editor(&self) -> CoreResult<SubmitOutcome> {
        let Some(editor) = self.editor().await else {
            return Ok(SubmitOutcome::Ignored);
        };

        let outcome = match editor.submit().await {
            Err(CoreError::Destroyed) => return Ok(SubmitOutcome::Discarded),
            other => other?,
        };
        if matches!(outcome, SubmitOutcome::Succeeded(_)) {
            let still_open = {
                let state = self.state.lock().await;
                state
                    .editor
                    .as_ref()
                    .is_some_and(|open| Arc::ptr_eq(open, &editor))
            };
            if still_open {
                self.close().await;
            }
            self.list.retry().await;
        }
        Ok(outcome)
    }

    /// Unmount the board and its editor.
    pub async fn destroy(&self) {
        self.close().await;
        self.list.destroy().await;
    }
}
