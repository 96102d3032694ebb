use std::sync::Arc;

use crate::domain::models::package::EquipmentPackage;
use crate::domain::models::session::Session;
use crate::domain::ports::{PackageApi, SessionApi};
use crate::error::AppError;

/// The reference data a booking form selects from, fetched in one shot.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub sessions: Vec<Session>,
    pub packages: Vec<EquipmentPackage>,
}

impl Catalog {
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn package(&self, id: &str) -> Option<&EquipmentPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Resolves a selection against the catalog, dropping ids that no
    /// longer exist in it.
    pub fn selected_packages(&self, ids: &[String]) -> Vec<&EquipmentPackage> {
        ids.iter().filter_map(|id| self.package(id)).collect()
    }
}

pub struct CatalogLoader {
    sessions: Arc<dyn SessionApi>,
    packages: Arc<dyn PackageApi>,
}

impl CatalogLoader {
    pub fn new(sessions: Arc<dyn SessionApi>, packages: Arc<dyn PackageApi>) -> Self {
        Self { sessions, packages }
    }

    /// Both lists are fetched concurrently; either failing fails the load.
    /// A form is never built from half a catalog.
    pub async fn load(&self) -> Result<Catalog, AppError> {
        let (sessions, packages) = tokio::try_join!(self.sessions.list(), self.packages.list())?;
        Ok(Catalog { sessions, packages })
    }
}
