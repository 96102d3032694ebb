use crate::domain::models::{
    booking::{Booking, BookingUpdate, NewBooking},
    instructor::{Instructor, NewInstructor},
    location::{Location, NewLocation},
    package::{EquipmentPackage, NewEquipmentPackage},
    session::{NewSession, Session},
    user::UserProfile,
};
use crate::domain::services::lifecycle::StatusChange;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait LocationApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Location>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Location, AppError>;
    async fn create(&self, location: &NewLocation) -> Result<Location, AppError>;
    async fn update(&self, id: &str, location: &NewLocation) -> Result<Location, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait InstructorApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Instructor>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Instructor, AppError>;
    async fn create(&self, instructor: &NewInstructor) -> Result<Instructor, AppError>;
    async fn update(&self, id: &str, instructor: &NewInstructor) -> Result<Instructor, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SessionApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Session>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Session, AppError>;
    async fn create(&self, session: &NewSession) -> Result<Session, AppError>;
    async fn update(&self, id: &str, session: &NewSession) -> Result<Session, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PackageApi: Send + Sync {
    async fn list(&self) -> Result<Vec<EquipmentPackage>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<EquipmentPackage, AppError>;
    async fn create(&self, package: &NewEquipmentPackage) -> Result<EquipmentPackage, AppError>;
    async fn update(&self, id: &str, package: &NewEquipmentPackage) -> Result<EquipmentPackage, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Booking, AppError>;
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError>;
    async fn update(&self, id: &str, update: &BookingUpdate) -> Result<Booking, AppError>;
    async fn update_status(&self, id: &str, change: &StatusChange) -> Result<Booking, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Returns the raw JWT on success.
    async fn login(&self, email: &str, password: &str) -> Result<String, AppError>;
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), AppError>;
    async fn update_profile(&self, username: &str) -> Result<UserProfile, AppError>;
    async fn reset_password(&self, email: &str) -> Result<(), AppError>;
}
