//! Collaborator trait definitions
//!
//! The controller consumes these; it never implements them. The REST
//! implementations live in `rigsdock-console-api`; tests use in-memory mocks.

mod auth_gateway;
mod collaborators;
mod session_store;

pub use auth_gateway::AuthGateway;
pub use collaborators::{CollectionFetcher, Mutator, ResourceFetcher};
pub use session_store::{InMemorySessionStore, SessionStore};
