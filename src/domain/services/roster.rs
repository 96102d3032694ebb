use crate::domain::models::booking::Booking;
use crate::domain::models::instructor::Instructor;
use crate::domain::models::location::Location;
use crate::domain::models::package::EquipmentPackage;
use crate::domain::models::session::Session;
use crate::domain::models::user::UserProfile;

pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Location {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Instructor {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Session {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for EquipmentPackage {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Booking {
    fn key(&self) -> &str {
        &self.id
    }
}

/// An id-keyed list kept current by merging single results of completed
/// requests, so a create, edit or status change never forces a reload.
#[derive(Debug, Clone)]
pub struct Roster<T: Keyed> {
    items: Vec<T>,
}

impl<T: Keyed> Roster<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn set(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Swaps in the item with the matching key, preserving order. An
    /// unknown key leaves the roster untouched.
    pub fn replace(&mut self, item: T) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == item.key()) {
            *existing = item;
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.items.retain(|i| i.key() != key);
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|i| i.key() == key)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Admins see every booking; customers only their own.
pub fn visible_bookings<'a>(bookings: &'a [Booking], viewer: &UserProfile) -> Vec<&'a Booking> {
    if viewer.is_admin() {
        bookings.iter().collect()
    } else {
        bookings.iter().filter(|b| b.user.id == viewer.id).collect()
    }
}
