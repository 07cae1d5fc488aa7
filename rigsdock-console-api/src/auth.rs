//! Admin and vendor login

use std::sync::Arc;

use async_trait::async_trait;
use rigsdock_console_core::types::{
    Credentials, LoginGrant, Role, SessionIdentity, SessionToken,
};
use rigsdock_console_core::{AuthGateway, CoreResult};

use crate::error::{ApiError, Result};
use crate::transport::{HttpTransport, RetryPolicy};
use crate::types::{LoginRequest, LoginResponse};

/// [`AuthGateway`] backed by the login endpoints.
pub struct AuthApi {
    transport: Arc<HttpTransport>,
}

impl AuthApi {
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    async fn request(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let scope = match credentials.role {
            Role::Admin => "admin",
            Role::Vendor => "vendor",
        };
        let url = self.transport.url(&[scope, "login"])?;
        let body = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };
        self.transport
            .send_json(&format!("POST {scope}/login"), RetryPolicy::Transient, |client| {
                Ok(client.post(url.clone()).json(&body))
            })
            .await
    }
}

/// Both roles end up as `{ role, id }`.
fn into_grant(role: Role, response: LoginResponse) -> Result<LoginGrant> {
    let id = match role {
        Role::Admin => response.admin.map(|admin| admin.id),
        Role::Vendor => response.vendor_id,
    }
    .filter(|id| !id.is_empty())
    .ok_or_else(|| ApiError::Parse {
        detail: format!("Login response has no {role:?} id"),
    })?;

    Ok(LoginGrant {
        identity: SessionIdentity { role, id },
        access_token: SessionToken::new(response.access_token),
        refresh_token: SessionToken::new(response.refresh_token),
    })
}

#[async_trait]
impl AuthGateway for AuthApi {
    async fn login(&self, credentials: &Credentials) -> CoreResult<LoginGrant> {
        let response = self.request(credentials).await?;
        Ok(into_grant(credentials.role, response)?)
    }
}
