use crate::domain::{models::user::UserProfile, ports::AuthApi};
use crate::error::AppError;
use crate::infra::http::ApiClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct LoginPayload {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct RegisterPayload {
    username: String,
    email: String,
    password: String,
}

#[derive(Serialize)]
struct UpdatePayload {
    username: String,
}

#[derive(Serialize)]
struct ResetPayload {
    email: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
struct UserResponse {
    user: UserProfile,
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        let res: TokenResponse = self.client.post("/users/login", &payload).await?;
        Ok(res.token)
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), AppError> {
        let payload = RegisterPayload {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let _: Value = self.client.post("/users/register", &payload).await?;
        Ok(())
    }

    async fn update_profile(&self, username: &str) -> Result<UserProfile, AppError> {
        let payload = UpdatePayload {
            username: username.to_string(),
        };
        let res: UserResponse = self.client.put("/users/update", &payload).await?;
        Ok(res.user)
    }

    async fn reset_password(&self, email: &str) -> Result<(), AppError> {
        let payload = ResetPayload {
            email: email.to_string(),
        };
        let _: Value = self.client.post("/users/reset-password", &payload).await?;
        Ok(())
    }
}
