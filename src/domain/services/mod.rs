pub mod auth_flow;
pub mod booking_flow;
pub mod catalog;
pub mod draft;
pub mod lifecycle;
pub mod pricing;
pub mod roster;
