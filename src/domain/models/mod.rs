pub mod auth;
pub mod booking;
pub mod instructor;
pub mod location;
pub mod package;
pub mod session;
pub mod user;
