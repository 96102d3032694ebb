use crate::domain::{
    models::location::{Location, NewLocation},
    ports::LocationApi,
};
use crate::error::AppError;
use crate::infra::http::ApiClient;
use async_trait::async_trait;

pub struct HttpLocationApi {
    client: ApiClient,
}

impl HttpLocationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationApi for HttpLocationApi {
    async fn list(&self) -> Result<Vec<Location>, AppError> {
        self.client.get("/locations").await
    }

    async fn find_by_id(&self, id: &str) -> Result<Location, AppError> {
        self.client.get(&format!("/locations/{}", id)).await
    }

    async fn create(&self, location: &NewLocation) -> Result<Location, AppError> {
        self.client.post("/locations", location).await
    }

    async fn update(&self, id: &str, location: &NewLocation) -> Result<Location, AppError> {
        self.client.put(&format!("/locations/{}", id), location).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(&format!("/locations/{}", id)).await
    }
}
