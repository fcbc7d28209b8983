//! Mock package store.

use crate::error::{BookingError, Result};
use crate::package::Package;
use crate::providers::PackageStore;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory package store.
///
/// Records are kept in insertion order; `list` iterates in reverse so
/// newest-first matches the persistent implementation.
#[derive(Debug, Clone)]
pub struct MockPackageStore {
    packages: Arc<Mutex<Vec<Package>>>,
}

impl MockPackageStore {
    /// Create an empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            packages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MockPackageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageStore for MockPackageStore {
    async fn insert(&self, package: &Package) -> Result<()> {
        self.packages
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .push(package.clone());
        Ok(())
    }

    async fn update(&self, package: &Package) -> Result<bool> {
        let mut packages = self
            .packages
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?;
        match packages.iter_mut().find(|p| p.id == package.id) {
            Some(existing) => {
                *existing = package.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, package_id: Uuid) -> Result<bool> {
        let mut packages = self
            .packages
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?;
        let before = packages.len();
        packages.retain(|p| p.id != package_id);
        Ok(packages.len() < before)
    }

    async fn get(&self, package_id: Uuid) -> Result<Option<Package>> {
        Ok(self
            .packages
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .iter()
            .find(|p| p.id == package_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Package>> {
        Ok(self
            .packages
            .lock()
            .map_err(|_| BookingError::Storage("mock lock poisoned".to_string()))?
            .iter()
            .rev()
            .cloned()
            .collect())
    }
}
