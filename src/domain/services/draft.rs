use crate::domain::models::booking::Booking;
use crate::error::AppError;

/// Client-local form state for a booking before submission. Discarded once
/// the booking is submitted or abandoned.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub session_id: Option<String>,
    pub package_ids: Vec<String>,
    pub notes: String,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            session_id: Some(booking.session.id.clone()),
            package_ids: booking.equipment_packages.iter().map(|p| p.id.clone()).collect(),
            notes: booking.notes.clone().unwrap_or_default(),
        }
    }

    /// Changing the session leaves the package selection alone.
    pub fn select_session(&mut self, id: impl Into<String>) {
        self.session_id = Some(id.into());
    }

    /// Adds the package if absent, removes it if present.
    pub fn toggle_package(&mut self, id: &str) {
        if let Some(pos) = self.package_ids.iter().position(|p| p == id) {
            self.package_ids.remove(pos);
        } else {
            self.package_ids.push(id.to_string());
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        match self.session_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(()),
            _ => Err(AppError::Validation("session required".to_string())),
        }
    }
}
