use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use tracing::info;

use crate::domain::models::auth::{AuthSession, TokenClaims};
use crate::domain::models::user::UserProfile;
use crate::domain::ports::AuthApi;
use crate::error::AppError;
use crate::state::SessionStore;

pub struct AuthFlow {
    api: Arc<dyn AuthApi>,
    session_store: SessionStore,
}

impl AuthFlow {
    pub fn new(api: Arc<dyn AuthApi>, session_store: SessionStore) -> Self {
        Self { api, session_store }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AppError> {
        let token = self.api.login(email, password).await?;
        let claims = decode_claims(&token)?;

        let user = UserProfile {
            id: claims.id,
            username: claims.username,
            email: claims.email,
            role: claims.role,
        };

        info!(username = %user.username, "Logged in");
        self.session_store.set(AuthSession {
            token,
            user: user.clone(),
            expires_at: claims.exp,
        });

        Ok(user)
    }

    /// Registration does not log the new account in; the caller sends the
    /// user through the login step next.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), AppError> {
        self.api.register(username, email, password).await
    }

    /// The returned profile replaces the stored one; token and expiry are
    /// untouched.
    pub async fn update_profile(&self, username: &str) -> Result<UserProfile, AppError> {
        let user = self.api.update_profile(username).await?;
        self.session_store.replace_user(user.clone());
        Ok(user)
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AppError> {
        self.api.reset_password(email).await
    }

    /// Local only; the backend has no logout endpoint.
    pub fn logout(&self) {
        info!("Logged out");
        self.session_store.clear();
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.session_store.current_user()
    }
}

/// Reads the claims out of a JWT without checking the signature. The token
/// only ever comes from the backend's own login response.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AppError> {
    let payload = token.split('.').nth(1).ok_or_else(invalid_token)?;
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| invalid_token())?;
    serde_json::from_slice(&bytes).map_err(|_| invalid_token())
}

fn invalid_token() -> AppError {
    AppError::Validation("invalid session token".to_string())
}
