use crate::domain::{
    models::package::{EquipmentPackage, NewEquipmentPackage},
    ports::PackageApi,
};
use crate::error::AppError;
use crate::infra::http::ApiClient;
use async_trait::async_trait;

pub struct HttpPackageApi {
    client: ApiClient,
}

impl HttpPackageApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PackageApi for HttpPackageApi {
    async fn list(&self) -> Result<Vec<EquipmentPackage>, AppError> {
        self.client.get("/packages").await
    }

    async fn find_by_id(&self, id: &str) -> Result<EquipmentPackage, AppError> {
        self.client.get(&format!("/packages/{}", id)).await
    }

    async fn create(&self, package: &NewEquipmentPackage) -> Result<EquipmentPackage, AppError> {
        self.client.post("/packages", package).await
    }

    async fn update(&self, id: &str, package: &NewEquipmentPackage) -> Result<EquipmentPackage, AppError> {
        self.client.put(&format!("/packages/{}", id), package).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(&format!("/packages/{}", id)).await
    }
}
