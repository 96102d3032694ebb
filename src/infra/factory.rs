use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::Config;
use crate::domain::ports::{AuthApi, BookingApi, InstructorApi, LocationApi, PackageApi, SessionApi};
use crate::domain::services::auth_flow::AuthFlow;
use crate::domain::services::booking_flow::BookingFlow;
use crate::domain::services::catalog::CatalogLoader;
use crate::infra::gateways::{
    http_auth_api::HttpAuthApi, http_booking_api::HttpBookingApi,
    http_instructor_api::HttpInstructorApi, http_location_api::HttpLocationApi,
    http_package_api::HttpPackageApi, http_session_api::HttpSessionApi,
};
use crate::infra::http::ApiClient;
use crate::state::{AppContext, SessionStore};

pub fn bootstrap_context(config: &Config) -> AppContext {
    info!("Initializing API client for {}", config.api_base_url);

    let session_store = SessionStore::new();
    let client = ApiClient::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
        session_store.clone(),
    );

    let locations: Arc<dyn LocationApi> = Arc::new(HttpLocationApi::new(client.clone()));
    let instructors: Arc<dyn InstructorApi> = Arc::new(HttpInstructorApi::new(client.clone()));
    let sessions: Arc<dyn SessionApi> = Arc::new(HttpSessionApi::new(client.clone()));
    let packages: Arc<dyn PackageApi> = Arc::new(HttpPackageApi::new(client.clone()));
    let bookings: Arc<dyn BookingApi> = Arc::new(HttpBookingApi::new(client.clone()));
    let auth: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(client));

    let catalog = CatalogLoader::new(sessions.clone(), packages.clone());
    let booking_flow = Arc::new(BookingFlow::new(bookings.clone(), catalog, session_store.clone()));
    let auth_flow = Arc::new(AuthFlow::new(auth.clone(), session_store.clone()));

    AppContext {
        config: config.clone(),
        session_store,
        locations,
        instructors,
        sessions,
        packages,
        bookings,
        auth,
        booking_flow,
        auth_flow,
    }
}
