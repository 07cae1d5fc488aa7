//! Test helper module
//!
//! Mock collaborators and convenient factories.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::traits::{AuthGateway, CollectionFetcher, Mutator, ResourceFetcher};
use crate::types::{
    Ack, Category, CategoryStatus, CollectionFilter, Credentials, Identity, LoginGrant,
    MainCategory, SessionIdentity, SessionToken, Submission,
};

// ===== MockFetcher =====

/// Resource fetcher backed by a map; individual identities can be held at a gate.
pub struct MockFetcher<R> {
    resources: RwLock<HashMap<String, R>>,
    error: RwLock<Option<CoreError>>,
    gates: RwLock<HashMap<String, Arc<Notify>>>,
    calls: AtomicUsize,
}

impl<R: Clone + Send + Sync + 'static> MockFetcher<R> {
    pub fn new() -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
            error: RwLock::new(None),
            gates: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn insert(&self, id: &str, resource: R) {
        self.resources.write().await.insert(id.to_string(), resource);
    }

    pub async fn set_error(&self, err: Option<CoreError>) {
        *self.error.write().await = err;
    }

    /// Fetches of `id` block until the returned gate is notified.
    pub async fn hold(&self, id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .write()
            .await
            .insert(id.to_string(), Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: Clone + Send + Sync + 'static> ResourceFetcher<R> for MockFetcher<R> {
    async fn fetch_by_identity(&self, identity: &Identity) -> CoreResult<R> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.read().await.get(identity.as_str()).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }
        self.resources
            .read()
            .await
            .get(identity.as_str())
            .cloned()
            .ok_or_else(|| CoreError::NotFound(identity.to_string()))
    }
}

// ===== MockCollection =====

pub struct MockCollection<I> {
    items: RwLock<Vec<I>>,
    error: RwLock<Option<CoreError>>,
    last_filter: RwLock<Option<CollectionFilter>>,
    calls: AtomicUsize,
}

impl<I: Clone + Send + Sync + 'static> MockCollection<I> {
    pub fn new(items: Vec<I>) -> Self {
        Self {
            items: RwLock::new(items),
            error: RwLock::new(None),
            last_filter: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_items(&self, items: Vec<I>) {
        *self.items.write().await = items;
    }

    pub async fn set_error(&self, err: Option<CoreError>) {
        *self.error.write().await = err;
    }

    pub async fn last_filter(&self) -> Option<CollectionFilter> {
        self.last_filter.read().await.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<I: Clone + Send + Sync + 'static> CollectionFetcher<I> for MockCollection<I> {
    async fn fetch_collection(&self, filter: Option<&CollectionFilter>) -> CoreResult<Vec<I>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filter.write().await = filter.cloned();
        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }
        Ok(self.items.read().await.clone())
    }
}

// ===== MockMutator =====

/// Records every submission; optionally fails or blocks at a gate.
pub struct MockMutator<F> {
    submissions: RwLock<Vec<(Option<Identity>, Submission<F>)>>,
    error: RwLock<Option<CoreError>>,
    gate: RwLock<Option<Arc<Notify>>>,
    calls: AtomicUsize,
}

impl<F: Clone + Send + Sync + 'static> MockMutator<F> {
    pub fn new() -> Self {
        Self {
            submissions: RwLock::new(Vec::new()),
            error: RwLock::new(None),
            gate: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_error(&self, err: Option<CoreError>) {
        *self.error.write().await = err;
    }

    /// Mutations block until the returned gate is notified.
    pub async fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    pub async fn submissions(&self) -> Vec<(Option<Identity>, Submission<F>)> {
        self.submissions.read().await.clone()
    }

    pub async fn last(&self) -> Option<(Option<Identity>, Submission<F>)> {
        self.submissions.read().await.last().cloned()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<F: Clone + Send + Sync + 'static> Mutator<F> for MockMutator<F> {
    async fn mutate(
        &self,
        identity: Option<&Identity>,
        submission: &Submission<F>,
    ) -> CoreResult<Ack> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.submissions
            .write()
            .await
            .push((identity.cloned(), submission.clone()));
        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }
        Ok(Ack {
            id: Some(identity.map_or_else(|| "new-1".to_string(), ToString::to_string)),
            message: None,
        })
    }
}

// ===== MockAuthGateway =====

pub struct MockAuthGateway {
    accounts: RwLock<HashMap<String, (String, SessionIdentity)>>,
    calls: AtomicUsize,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn add_account(&self, email: &str, password: &str, identity: SessionIdentity) {
        self.accounts
            .write()
            .await
            .insert(email.to_string(), (password.to_string(), identity));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, credentials: &Credentials) -> CoreResult<LoginGrant> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let accounts = self.accounts.read().await;
        match accounts.get(&credentials.email) {
            Some((password, identity))
                if *password == credentials.password && identity.role == credentials.role =>
            {
                Ok(LoginGrant {
                    identity: identity.clone(),
                    access_token: SessionToken::new(format!("access-{n}")),
                    refresh_token: SessionToken::new(format!("refresh-{n}")),
                })
            }
            _ => Err(CoreError::Unauthorized(
                "Invalid credentials. Please try again.".to_string(),
            )),
        }
    }
}

// ===== Factory methods =====

/// The category from the reference scenario.
pub fn shoes_category() -> Category {
    Category {
        id: "cat-1".to_string(),
        name: "Shoes".to_string(),
        description: "Footwear".to_string(),
        main_category: Some("main-9".to_string()),
        status: CategoryStatus::Active,
        image_url: None,
    }
}

pub fn main_categories() -> Vec<MainCategory> {
    vec![
        MainCategory {
            id: "main-9".to_string(),
            name: "Fashion".to_string(),
        },
        MainCategory {
            id: "main-3".to_string(),
            name: "Electronics".to_string(),
        },
    ]
}
