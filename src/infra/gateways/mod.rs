pub mod http_auth_api;
pub mod http_booking_api;
pub mod http_instructor_api;
pub mod http_location_api;
pub mod http_package_api;
pub mod http_session_api;
