//! Shared test helpers: a wiremock backend and a signed-in session

#![allow(dead_code)]

use std::sync::Arc;

use rigsdock_console_api::{ApiConfig, AuthApi, HttpTransport, StorefrontApi};
use rigsdock_console_core::types::{Credentials, Role};
use rigsdock_console_core::{InMemorySessionStore, SessionContext};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "test-access-token";

/// Assert that a `Result` is `Ok` and unwrap it (fail the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub struct Backend {
    pub server: MockServer,
    pub transport: Arc<HttpTransport>,
    pub session: Arc<SessionContext>,
}

impl Backend {
    pub async fn start(max_retries: u32) -> Self {
        Self::start_with_timeout(5, max_retries).await
    }

    pub async fn start_with_timeout(timeout_secs: u64, max_retries: u32) -> Self {
        let server = MockServer::start().await;
        let config = ApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout_secs,
            max_retries,
        };
        let transport = Arc::new(HttpTransport::new(&config).unwrap());
        let session = Arc::new(SessionContext::new(
            Arc::new(AuthApi::new(Arc::clone(&transport))),
            Arc::new(InMemorySessionStore::new()),
        ));
        Self {
            server,
            transport,
            session,
        }
    }

    /// Backend with a session of `role` already established.
    pub async fn signed_in(role: Role, max_retries: u32) -> Self {
        Self::signed_in_with_timeout(role, 5, max_retries).await
    }

    pub async fn signed_in_with_timeout(role: Role, timeout_secs: u64, max_retries: u32) -> Self {
        let backend = Self::start_with_timeout(timeout_secs, max_retries).await;
        let scope = match role {
            Role::Admin => "admin",
            Role::Vendor => "vendor",
        };
        Mock::given(method("POST"))
            .and(path(format!("/api/{scope}/login")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accessToken": ACCESS_TOKEN,
                "refreshToken": "test-refresh-token",
                "admin": { "id": "adm-1" },
                "vendorId": "ven-7"
            })))
            .mount(&backend.server)
            .await;
        backend
            .session
            .establish(&Credentials {
                role,
                email: "someone@rigsdock.test".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();
        backend
    }

    pub fn storefront(&self) -> StorefrontApi {
        StorefrontApi::new(Arc::clone(&self.transport), Arc::clone(&self.session))
    }
}
