pub mod factory;
pub mod gateways;
pub mod http;
