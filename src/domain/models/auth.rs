use chrono::Utc;
use serde::Deserialize;

use crate::domain::models::user::{Role, UserProfile};

/// Payload segment of the backend-issued JWT. The client reads it without
/// verifying the signature; the backend rejects tampered tokens on use.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
    /// Unix timestamp (seconds) from the token's `exp` claim.
    pub expires_at: i64,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now().timestamp()
    }
}
