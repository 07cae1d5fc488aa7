//! Session related type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Console role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Vendor,
}

/// Who is signed in.
///
/// Both roles are stored the same way: role plus identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub role: Role,
    pub id: String,
}

/// Bearer token sent with authenticated requests
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Established session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub identity: SessionIdentity,
    pub access_token: SessionToken,
    pub refresh_token: SessionToken,
}

/// Login credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub role: Role,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("role", &self.role)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// What the auth backend hands back on a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub identity: SessionIdentity,
    pub access_token: SessionToken,
    pub refresh_token: SessionToken,
}

impl From<LoginGrant> for Session {
    fn from(grant: LoginGrant) -> Self {
        Self {
            identity: grant.identity,
            access_token: grant.access_token,
            refresh_token: grant.refresh_token,
        }
    }
}
