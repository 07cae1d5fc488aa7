//! Authentication backend Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Credentials, LoginGrant};

/// Issues session tokens for admin and vendor logins
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token grant
    ///
    /// # Arguments
    /// * `credentials` - Role, email and password
    async fn login(&self, credentials: &Credentials) -> CoreResult<LoginGrant>;
}
