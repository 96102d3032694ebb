use crate::domain::{
    models::session::{NewSession, Session},
    ports::SessionApi,
};
use crate::error::AppError;
use crate::infra::http::ApiClient;
use async_trait::async_trait;

pub struct HttpSessionApi {
    client: ApiClient,
}

impl HttpSessionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionApi for HttpSessionApi {
    async fn list(&self) -> Result<Vec<Session>, AppError> {
        self.client.get("/sessions").await
    }

    async fn find_by_id(&self, id: &str) -> Result<Session, AppError> {
        self.client.get(&format!("/sessions/{}", id)).await
    }

    async fn create(&self, session: &NewSession) -> Result<Session, AppError> {
        self.client.post("/sessions", session).await
    }

    async fn update(&self, id: &str, session: &NewSession) -> Result<Session, AppError> {
        self.client.put(&format!("/sessions/{}", id), session).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(&format!("/sessions/{}", id)).await
    }
}
