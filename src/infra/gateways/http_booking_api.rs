use crate::domain::{
    models::booking::{Booking, BookingUpdate, NewBooking},
    ports::BookingApi,
    services::lifecycle::StatusChange,
};
use crate::error::AppError;
use crate::infra::http::ApiClient;
use async_trait::async_trait;

pub struct HttpBookingApi {
    client: ApiClient,
}

impl HttpBookingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        self.client.get("/bookings").await
    }

    async fn find_by_id(&self, id: &str) -> Result<Booking, AppError> {
        self.client.get(&format!("/bookings/{}", id)).await
    }

    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        self.client.post("/bookings", booking).await
    }

    async fn update(&self, id: &str, update: &BookingUpdate) -> Result<Booking, AppError> {
        self.client.put(&format!("/bookings/{}", id), update).await
    }

    async fn update_status(&self, id: &str, change: &StatusChange) -> Result<Booking, AppError> {
        self.client.put(&format!("/bookings/{}", id), change).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(&format!("/bookings/{}", id)).await
    }
}
