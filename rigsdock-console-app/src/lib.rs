//! Platform-agnostic bootstrap for the Rigsdock console.
//!
//! Provides `ConsoleState` (collaborator container and controller factory)
//! and `ConsoleStateBuilder` (collaborator injection).

use std::sync::Arc;

use rigsdock_console_api::{ApiConfig, AuthApi, HttpTransport, StorefrontApi};
use rigsdock_console_core::error::{CoreError, CoreResult};
use rigsdock_console_core::forms::{
    CarouselBoard, CarouselEditor, CategoryEditor, LoadedCarouselLookup, LoginForm,
    NotificationFeed, OrderDetails,
};
use rigsdock_console_core::traits::{
    AuthGateway, CollectionFetcher, InMemorySessionStore, Mutator, ResourceFetcher, SessionStore,
};
use rigsdock_console_core::types::{
    CarouselFields, CarouselItem, Category, CategoryFields, MainCategory, VendorNotification,
    VendorOrder,
};
use rigsdock_console_core::{ResourceController, SessionContext};

/// Shared collaborators for every console screen.
///
/// Construct once at startup; each factory method hands out a fresh,
/// unbound controller instance.
pub struct ConsoleState {
    session: Arc<SessionContext>,
    categories: Arc<dyn ResourceFetcher<Category>>,
    main_categories: Arc<dyn CollectionFetcher<MainCategory>>,
    category_updates: Arc<dyn Mutator<CategoryFields>>,
    carousels: Arc<dyn CollectionFetcher<CarouselItem>>,
    carousel_saves: Arc<dyn Mutator<CarouselFields>>,
    orders: Arc<dyn ResourceFetcher<VendorOrder>>,
    notifications: Arc<dyn CollectionFetcher<VendorNotification>>,
}

impl ConsoleState {
    /// Wire the REST collaborators with an in-memory session store.
    pub fn from_config(config: &ApiConfig) -> CoreResult<Self> {
        Self::from_config_with_store(config, Arc::new(InMemorySessionStore::new()))
    }

    /// Wire the REST collaborators, persisting sessions in `session_store`.
    pub fn from_config_with_store(
        config: &ApiConfig,
        session_store: Arc<dyn SessionStore>,
    ) -> CoreResult<Self> {
        let transport = Arc::new(HttpTransport::new(config)?);
        let session = Arc::new(SessionContext::new(
            Arc::new(AuthApi::new(Arc::clone(&transport))),
            session_store,
        ));
        let api = Arc::new(StorefrontApi::new(transport, Arc::clone(&session)));
        log::info!("Console wired to {}", config.base_url);

        ConsoleStateBuilder::new()
            .session(session)
            .categories(api.clone())
            .main_categories(api.clone())
            .category_updates(api.clone())
            .carousels(api.clone())
            .carousel_saves(api.clone())
            .orders(api.clone())
            .notifications(api)
            .build()
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Load a persisted session; returns whether one was found.
    pub async fn restore_session(&self) -> CoreResult<bool> {
        match self.session.restore().await {
            Ok(found) => Ok(found),
            Err(e) => {
                log::error!("Failed to restore session: {e}");
                Err(e)
            }
        }
    }

    pub fn category_editor(&self) -> Arc<ResourceController<CategoryEditor>> {
        Arc::new(CategoryEditor::controller(
            Arc::clone(&self.categories),
            Arc::clone(&self.main_categories),
            Arc::clone(&self.category_updates),
        ))
    }

    /// Standalone carousel editor seeded from `loaded` rows.
    pub fn carousel_editor(
        &self,
        loaded: Arc<[CarouselItem]>,
    ) -> Arc<ResourceController<CarouselEditor>> {
        Arc::new(CarouselEditor::controller(
            Arc::new(LoadedCarouselLookup::new(loaded)),
            Arc::clone(&self.carousel_saves),
        ))
    }

    pub fn carousel_board(&self) -> Arc<CarouselBoard> {
        Arc::new(CarouselBoard::new(
            Arc::clone(&self.carousels),
            Arc::clone(&self.carousel_saves),
        ))
    }

    pub fn login_form(&self) -> Arc<ResourceController<LoginForm>> {
        Arc::new(LoginForm::controller(Arc::clone(&self.session)))
    }

    pub fn order_details(&self) -> Arc<ResourceController<OrderDetails>> {
        Arc::new(OrderDetails::controller(Arc::clone(&self.orders)))
    }

    /// Feed for the signed-in vendor; `NotSignedIn` otherwise.
    pub async fn notification_feed(&self) -> CoreResult<Arc<ResourceController<NotificationFeed>>> {
        let feed =
            NotificationFeed::controller(Arc::clone(&self.notifications), &self.session).await?;
        Ok(Arc::new(feed))
    }
}

/// Builder for constructing `ConsoleState` with injected collaborators.
///
/// # Required collaborators
/// - `categories`, `main_categories`, `category_updates`
/// - `carousels`, `carousel_saves`
/// - `orders`, `notifications`
/// - `auth_gateway`, unless a prebuilt `session` is supplied
///
/// # Optional
/// - `session_store`: defaults to `InMemorySessionStore`
pub struct ConsoleStateBuilder {
    categories: Option<Arc<dyn ResourceFetcher<Category>>>,
    main_categories: Option<Arc<dyn CollectionFetcher<MainCategory>>>,
    category_updates: Option<Arc<dyn Mutator<CategoryFields>>>,
    carousels: Option<Arc<dyn CollectionFetcher<CarouselItem>>>,
    carousel_saves: Option<Arc<dyn Mutator<CarouselFields>>>,
    orders: Option<Arc<dyn ResourceFetcher<VendorOrder>>>,
    notifications: Option<Arc<dyn CollectionFetcher<VendorNotification>>>,
    auth_gateway: Option<Arc<dyn AuthGateway>>,
    session_store: Option<Arc<dyn SessionStore>>,
    session: Option<Arc<SessionContext>>,
}

fn required<T>(value: Option<T>, name: &str) -> CoreResult<T> {
    value.ok_or_else(|| CoreError::ValidationError(format!("{name} is required")))
}

impl ConsoleStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: None,
            main_categories: None,
            category_updates: None,
            carousels: None,
            carousel_saves: None,
            orders: None,
            notifications: None,
            auth_gateway: None,
            session_store: None,
            session: None,
        }
    }

    #[must_use]
    pub fn categories(mut self, fetcher: Arc<dyn ResourceFetcher<Category>>) -> Self {
        self.categories = Some(fetcher);
        self
    }

    #[must_use]
    pub fn main_categories(mut self, fetcher: Arc<dyn CollectionFetcher<MainCategory>>) -> Self {
        self.main_categories = Some(fetcher);
        self
    }

    #[must_use]
    pub fn category_updates(mut self, mutator: Arc<dyn Mutator<CategoryFields>>) -> Self {
        self.category_updates = Some(mutator);
        self
    }

    #[must_use]
    pub fn carousels(mut self, fetcher: Arc<dyn CollectionFetcher<CarouselItem>>) -> Self {
        self.carousels = Some(fetcher);
        self
    }

    #[must_use]
    pub fn carousel_saves(mut self, mutator: Arc<dyn Mutator<CarouselFields>>) -> Self {
        self.carousel_saves = Some(mutator);
        self
    }

    #[must_use]
    pub fn orders(mut self, fetcher: Arc<dyn ResourceFetcher<VendorOrder>>) -> Self {
        self.orders = Some(fetcher);
        self
    }

    #[must_use]
    pub fn notifications(
        mut self,
        fetcher: Arc<dyn CollectionFetcher<VendorNotification>>,
    ) -> Self {
        self.notifications = Some(fetcher);
        self
    }

    #[must_use]
    pub fn auth_gateway(mut self, gateway: Arc<dyn AuthGateway>) -> Self {
        self.auth_gateway = Some(gateway);
        self
    }

    #[must_use]
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Use an existing session context instead of `auth_gateway`/`session_store`.
    #[must_use]
    pub fn session(mut self, session: Arc<SessionContext>) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the `ConsoleState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` naming the first missing collaborator.
    pub fn build(self) -> CoreResult<ConsoleState> {
        let session = match self.session {
            Some(session) => session,
            None => {
                let gateway = required(self.auth_gateway, "auth_gateway")?;
                let store = self
                    .session_store
                    .unwrap_or_else(|| Arc::new(InMemorySessionStore::new()));
                Arc::new(SessionContext::new(gateway, store))
            }
        };

        Ok(ConsoleState {
            session,
            categories: required(self.categories, "categories")?,
            main_categories: required(self.main_categories, "main_categories")?,
            category_updates: required(self.category_updates, "category_updates")?,
            carousels: required(self.carousels, "carousels")?,
            carousel_saves: required(self.carousel_saves, "carousel_saves")?,
            orders: required(self.orders, "orders")?,
            notifications: required(self.notifications, "notifications")?,
        })
    }
}

impl Default for ConsoleStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
