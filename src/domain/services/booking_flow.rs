use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::domain::models::booking::{Booking, BookingStatus, BookingUpdate, NewBooking};
use crate::domain::models::package::EquipmentPackage;
use crate::domain::models::session::Session;
use crate::domain::ports::BookingApi;
use crate::domain::services::catalog::{Catalog, CatalogLoader};
use crate::domain::services::draft::BookingDraft;
use crate::domain::services::lifecycle::StatusChange;
use crate::domain::services::pricing;
use crate::error::AppError;
use crate::state::SessionStore;

pub const BOOK_FAILED_MSG: &str = "Failed to book – please try again";
pub const UPDATE_FAILED_MSG: &str = "Failed to update booking – please try again";

/// A draft bound to the catalog it selects from. Ids that are not in the
/// catalog never make it into the draft.
#[derive(Debug, Clone)]
pub struct BookingForm {
    catalog: Catalog,
    draft: BookingDraft,
}

impl BookingForm {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            draft: BookingDraft::new(),
        }
    }

    /// Pre-fills from an existing booking. Selections pointing at entries
    /// that have since left the catalog are dropped.
    pub fn edit(catalog: Catalog, booking: &Booking) -> Self {
        let mut draft = BookingDraft::from_booking(booking);
        if let Some(id) = draft.session_id.as_deref()
            && catalog.session(id).is_none()
        {
            draft.session_id = None;
        }
        draft.package_ids.retain(|id| catalog.package(id).is_some());
        Self { catalog, draft }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn select_session(&mut self, id: &str) -> Result<(), AppError> {
        if self.catalog.session(id).is_none() {
            return Err(AppError::Validation(format!("unknown session: {}", id)));
        }
        self.draft.select_session(id);
        Ok(())
    }

    pub fn toggle_package(&mut self, id: &str) -> Result<(), AppError> {
        if self.catalog.package(id).is_none() {
            return Err(AppError::Validation(format!("unknown package: {}", id)));
        }
        self.draft.toggle_package(id);
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.draft.session_id.as_deref().and_then(|id| self.catalog.session(id))
    }

    pub fn selected_packages(&self) -> Vec<&EquipmentPackage> {
        self.catalog.selected_packages(&self.draft.package_ids)
    }

    /// Live preview of the price; `None` until a session is chosen.
    pub fn total(&self) -> Option<f64> {
        pricing::compute_total(self.selected_session(), &self.selected_packages())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.draft.validate()
    }
}

/// One submission at a time. A second attempt while a permit is out fails
/// immediately; dropping the permit re-arms the gate.
pub struct SubmitGate {
    in_flight: AtomicBool,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self {
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn try_begin(&self) -> Result<SubmitPermit<'_>, AppError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AppError::Validation("submission already in progress".to_string()));
        }
        Ok(SubmitPermit { gate: self })
    }
}

impl Default for SubmitGate {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SubmitPermit<'a> {
    gate: &'a SubmitGate,
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

pub struct BookingFlow {
    bookings: Arc<dyn BookingApi>,
    catalog: CatalogLoader,
    session_store: SessionStore,
    gate: SubmitGate,
}

impl BookingFlow {
    pub fn new(bookings: Arc<dyn BookingApi>, catalog: CatalogLoader, session_store: SessionStore) -> Self {
        Self {
            bookings,
            catalog,
            session_store,
            gate: SubmitGate::new(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Booking>, AppError> {
        self.bookings.list().await
    }

    pub async fn find(&self, booking_id: &str) -> Result<Booking, AppError> {
        self.bookings.find_by_id(booking_id).await
    }

    pub async fn create_form(&self) -> Result<BookingForm, AppError> {
        let catalog = self.catalog.load().await?;
        Ok(BookingForm::new(catalog))
    }

    /// Booking and catalog are fetched concurrently; the form comes back
    /// pre-filled with the booking's current selection.
    pub async fn edit_form(&self, booking_id: &str) -> Result<(Booking, BookingForm), AppError> {
        let (booking, catalog) =
            tokio::try_join!(self.bookings.find_by_id(booking_id), self.catalog.load())?;
        let form = BookingForm::edit(catalog, &booking);
        Ok((booking, form))
    }

    pub async fn submit_new(&self, form: &BookingForm) -> Result<Booking, AppError> {
        let _permit = self.gate.try_begin()?;

        let user = self
            .session_store
            .current_user()
            .ok_or_else(|| AppError::Validation("You must be logged in to book".to_string()))?;
        form.validate()?;

        let draft = form.draft();
        let payload = NewBooking {
            session: draft.session_id.clone().unwrap_or_default(),
            equipment_packages: draft.package_ids.clone(),
            notes: draft.notes.clone(),
            user: user.id,
        };

        debug!(session = %payload.session, packages = payload.equipment_packages.len(), "Submitting new booking");
        self.bookings.create(&payload).await
    }

    pub async fn submit_edit(&self, booking_id: &str, form: &BookingForm) -> Result<Booking, AppError> {
        let _permit = self.gate.try_begin()?;

        if self.session_store.current_user().is_none() {
            return Err(AppError::Validation("You must be logged in to book".to_string()));
        }
        form.validate()?;

        let draft = form.draft();
        let payload = BookingUpdate {
            session: draft.session_id.clone().unwrap_or_default(),
            equipment_packages: draft.package_ids.clone(),
            notes: draft.notes.clone(),
        };

        debug!(booking_id, "Submitting booking update");
        self.bookings.update(booking_id, &payload).await
    }

    /// The returned booking is the merged replacement for the caller's list.
    pub async fn change_status(&self, booking_id: &str, change: StatusChange) -> Result<Booking, AppError> {
        self.bookings.update_status(booking_id, &change).await
    }

    pub async fn cancel(&self, booking_id: &str, reason: &str) -> Result<Booking, AppError> {
        let change = StatusChange::new(BookingStatus::Cancelled, Some(reason))?;
        self.bookings.update_status(booking_id, &change).await
    }

    pub async fn delete(&self, booking_id: &str) -> Result<(), AppError> {
        self.bookings.delete(booking_id).await
    }
}
