use crate::domain::models::package::EquipmentPackage;
use crate::domain::models::session::Session;

/// Total for a booking selection. No session selected means there is no
/// total yet, which is not the same as a total of zero. Unpriced entries
/// count as 0.
pub fn compute_total(session: Option<&Session>, packages: &[&EquipmentPackage]) -> Option<f64> {
    let session = session?;
    let base = session.price.unwrap_or(0.0);
    let extras: f64 = packages.iter().map(|p| p.price.unwrap_or(0.0)).sum();
    Some(base + extras)
}
