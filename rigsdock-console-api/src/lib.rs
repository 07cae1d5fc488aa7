//! # rigsdock-console-api
//!
//! REST collaborators for the Rigsdock admin and vendor console. Each type
//! here implements one or more collaborator traits of
//! `rigsdock-console-core` against the storefront backend.
//!
//! ## Endpoints
//!
//! | Collaborator | Method | Path | Body |
//! |--------------|--------|------|------|
//! | `ResourceFetcher<Category>` | GET | `admin/category/{id}` | `{ category }` |
//! | `CollectionFetcher<MainCategory>` | GET | `admin/maincategory` | `{ mainCategories }` |
//! | `Mutator<CategoryFields>` | PATCH | `admin/category/{id}` | multipart |
//! | `CollectionFetcher<CarouselItem>` | GET | `admin/carousel` | `{ carousels }` |
//! | `Mutator<CarouselFields>` | POST / PATCH | `admin/carousel[/{id}]` | multipart |
//! | `ResourceFetcher<VendorOrder>` | GET | `vendor/order/{id}` | order |
//! | `CollectionFetcher<VendorNotification>` | GET | `vendor/notifications?vendorId=` | list |
//! | `AuthGateway` | POST | `admin/login`, `vendor/login` | JSON |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use rigsdock_console_api::{ApiConfig, AuthApi, HttpTransport, StorefrontApi};
//! use rigsdock_console_core::{InMemorySessionStore, ResourceFetcher, SessionContext};
//! use rigsdock_console_core::types::{Category, Credentials, Identity, Role};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::from_toml_str(r#"base_url = "https://rigsdock.example/api""#)?;
//!     let transport = Arc::new(HttpTransport::new(&config)?);
//!
//!     let session = Arc::new(SessionContext::new(
//!         Arc::new(AuthApi::new(Arc::clone(&transport))),
//!         Arc::new(InMemorySessionStore::new()),
//!     ));
//!     session
//!         .establish(&Credentials {
//!             role: Role::Admin,
//!             email: "admin@rigsdock.example".into(),
//!             password: "secret".into(),
//!         })
//!         .await?;
//!
//!     let api = StorefrontApi::new(transport, session);
//!     let category: Category = api.fetch_by_identity(&Identity::new("cat-1")).await?;
//!     println!("{} ({})", category.name, category.status.as_str());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Transport failures are [`ApiError`]s and convert into `CoreError` at the
//! trait boundary. A `{ "message": ... }` body on an error status becomes
//! the reason shown to the user. `Network`, `Timeout` and `RateLimited` are
//! retried with exponential backoff.

mod auth;
mod config;
mod error;
mod storefront;
mod transport;
mod types;

pub use auth::AuthApi;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use storefront::StorefrontApi;
pub use transport::{HttpTransport, RetryPolicy};
