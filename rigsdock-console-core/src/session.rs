//! Explicit session context
//!
//! Holds the signed-in identity and its tokens. Collaborators that need an
//! access token read it from here instead of from ambient global state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AuthGateway, SessionStore};
use crate::types::{Credentials, Role, Session, SessionIdentity, SessionToken};

pub struct SessionContext {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            store,
            current: RwLock::new(None),
        }
    }

    /// Log in and make the result the current session.
    ///
    /// Replaces any previous session of either role. A failed login leaves
    /// the existing session in place.
    pub async fn establish(&self, credentials: &Credentials) -> CoreResult<SessionToken> {
        let grant = self.gateway.login(credentials).await?;
        let session = Session::from(grant);

        self.store.save(&session).await?;
        let token = session.access_token.clone();
        let previous = self.current.write().await.replace(session);

        if let Some(previous) = previous {
            log::debug!("Replaced {:?} session", previous.identity.role);
        }
        log::info!("Signed in as {:?} ({})", credentials.role, credentials.email);
        Ok(token)
    }

    /// Sign out.
    pub async fn clear(&self) -> CoreResult<()> {
        self.current.write().await.take();
        self.store.clear().await?;
        log::info!("Signed out");
        Ok(())
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn identity(&self) -> Option<SessionIdentity> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|session| session.identity.clone())
    }

    /// Token for authenticated requests.
    pub async fn access_token(&self) -> CoreResult<SessionToken> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|session| session.access_token.clone())
            .ok_or(CoreError::NotSignedIn)
    }

    /// Identifier of the signed-in vendor.
    pub async fn vendor_id(&self) -> CoreResult<String> {
        match self.identity().await {
            Some(SessionIdentity {
                role: Role::Vendor,
                id,
            }) => Ok(id),
            _ => Err(CoreError::NotSignedIn),
        }
    }

    /// Load a persisted session at startup.
    ///
    /// Returns whether one was found.
    pub async fn restore(&self) -> CoreResult<bool> {
        let Some(session) = self.store.load().await? else {
            log::debug!("No persisted session");
            return Ok(false);
        };
        log::info!("Restored {:?} session", session.identity.role);
        *self.current.write().await = Some(session);
        Ok(true)
    }
}
