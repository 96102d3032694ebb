use std::sync::{Arc, RwLock};

use crate::config::Config;
use crate::domain::models::auth::AuthSession;
use crate::domain::models::user::UserProfile;
use crate::domain::ports::{AuthApi, BookingApi, InstructorApi, LocationApi, PackageApi, SessionApi};
use crate::domain::services::auth_flow::AuthFlow;
use crate::domain::services::booking_flow::BookingFlow;

/// Holds the authenticated session, if any. Passed explicitly to whatever
/// needs it; there is no process-global login state. An expired session is
/// evicted on first access.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, session: AuthSession) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        *guard = Some(session);
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        *guard = None;
    }

    pub fn token(&self) -> Option<String> {
        self.active().map(|s| s.token)
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.active().map(|s| s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.active().is_some()
    }

    /// Swaps the stored profile, keeping token and expiry. No-op when
    /// logged out.
    pub fn replace_user(&self, user: UserProfile) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        if let Some(session) = guard.as_mut() {
            session.user = user;
        }
    }

    fn active(&self) -> Option<AuthSession> {
        {
            let guard = self.inner.read().expect("session lock poisoned");
            match guard.as_ref() {
                None => return None,
                Some(session) if !session.is_expired() => return Some(session.clone()),
                Some(_) => {}
            }
        }
        self.clear();
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub session_store: SessionStore,
    pub locations: Arc<dyn LocationApi>,
    pub instructors: Arc<dyn InstructorApi>,
    pub sessions: Arc<dyn SessionApi>,
    pub packages: Arc<dyn PackageApi>,
    pub bookings: Arc<dyn BookingApi>,
    pub auth: Arc<dyn AuthApi>,
    pub booking_flow: Arc<BookingFlow>,
    pub auth_flow: Arc<AuthFlow>,
}
