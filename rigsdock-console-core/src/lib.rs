//! Rigsdock Console Core Library
//!
//! Platform-independent controller logic for the Rigsdock admin and vendor
//! console:
//! - Generic resource form/list controller ([`controller`])
//! - Per-screen form schemas ([`forms`])
//! - Explicit session context ([`session`])
//!
//! Remote data is reached only through the collaborator traits in
//! [`traits`]; the HTTP implementations live in a separate crate.

pub mod controller;
pub mod editing;
pub mod error;
pub mod forms;
pub mod session;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::{ControllerSnapshot, FormSchema, Phase, ResourceController, Settlement, SubmitOutcome};
pub use editing::{EditingTarget, EditorSlot};
pub use error::{CoreError, CoreResult};
pub use session::SessionContext;
pub use traits::{AuthGateway, CollectionFetcher, InMemorySessionStore, Mutator, ResourceFetcher, SessionStore};
