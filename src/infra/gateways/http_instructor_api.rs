use crate::domain::{
    models::instructor::{Instructor, NewInstructor},
    ports::InstructorApi,
};
use crate::error::AppError;
use crate::infra::http::ApiClient;
use async_trait::async_trait;

pub struct HttpInstructorApi {
    client: ApiClient,
}

impl HttpInstructorApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InstructorApi for HttpInstructorApi {
    async fn list(&self) -> Result<Vec<Instructor>, AppError> {
        self.client.get("/instructors").await
    }

    async fn find_by_id(&self, id: &str) -> Result<Instructor, AppError> {
        self.client.get(&format!("/instructors/{}", id)).await
    }

    async fn create(&self, instructor: &NewInstructor) -> Result<Instructor, AppError> {
        self.client.post("/instructors", instructor).await
    }

    async fn update(&self, id: &str, instructor: &NewInstructor) -> Result<Instructor, AppError> {
        self.client.put(&format!("/instructors/{}", id), instructor).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(&format!("/instructors/{}", id)).await
    }
}
