//! Catalog service: public package reads, admin-only writes.

use crate::error::{BookingError, Result};
use crate::package::{Package, PackageDraft, PackageUpdate};
use crate::principal::Principal;
use crate::providers::PackageStore;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Catalog over a pluggable package store.
///
/// Reads require no principal; writes require an admin. Deleting a
/// package never touches bookings that reference it — their frozen
/// `total_price` stands and their reads degrade to an absent snapshot.
#[derive(Clone)]
pub struct Catalog {
    packages: Arc<dyn PackageStore>,
}

impl Catalog {
    /// Create a catalog over the given store.
    #[must_use]
    pub fn new(packages: Arc<dyn PackageStore>) -> Self {
        Self { packages }
    }

    /// Every package, newest-first.
    ///
    /// # Errors
    ///
    /// Returns error if the store query fails.
    pub async fn list(&self) -> Result<Vec<Package>> {
        self.packages.list().await
    }

    /// One package by id.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if absent.
    pub async fn get(&self, package_id: Uuid) -> Result<Package> {
        self.packages
            .get(package_id)
            .await?
            .ok_or(BookingError::not_found("Package"))
    }

    /// Create a package. Admin only.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Forbidden`] for non-admin principals.
    /// - [`BookingError::InvalidArgument`] for a negative price, a
    ///   capacity below 1, or empty title/location/image.
    pub async fn create(&self, principal: &Principal, draft: PackageDraft) -> Result<Package> {
        require_admin(principal)?;
        validate_draft(&draft)?;

        let now = Utc::now();
        let package = Package {
            id: Uuid::new_v4(),
            title: draft.title,
            location: draft.location,
            price: draft.price,
            description: draft.description,
            image: draft.image,
            duration: draft.duration,
            max_group_size: draft.max_group_size,
            difficulty: draft.difficulty,
            featured: draft.featured,
            created_at: now,
            updated_at: now,
        };
        self.packages.insert(&package).await?;

        tracing::info!(package_id = %package.id, title = %package.title, "Package created");
        Ok(package)
    }

    /// Apply a partial update to a package. Admin only.
    ///
    /// Editing the price affects future bookings only; existing bookings
    /// keep their frozen totals.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Forbidden`] for non-admin principals.
    /// - [`BookingError::NotFound`] if the package does not exist.
    /// - [`BookingError::InvalidArgument`] if the update would leave the
    ///   package with a negative price or capacity below 1.
    pub async fn update(
        &self,
        principal: &Principal,
        package_id: Uuid,
        update: PackageUpdate,
    ) -> Result<Package> {
        require_admin(principal)?;

        let mut package = self
            .packages
            .get(package_id)
            .await?
            .ok_or(BookingError::not_found("Package"))?;

        if let Some(title) = update.title {
            package.title = title;
        }
        if let Some(location) = update.location {
            package.location = location;
        }
        if let Some(price) = update.price {
            package.price = price;
        }
        if let Some(description) = update.description {
            package.description = description;
        }
        if let Some(image) = update.image {
            package.image = image;
        }
        if let Some(duration) = update.duration {
            package.duration = duration;
        }
        if let Some(max_group_size) = update.max_group_size {
            package.max_group_size = max_group_size;
        }
        if let Some(difficulty) = update.difficulty {
            package.difficulty = difficulty;
        }
        if let Some(featured) = update.featured {
            package.featured = featured;
        }

        if package.price < 0.0 {
            return Err(BookingError::invalid("price cannot be negative"));
        }
        if package.max_group_size < 1 {
            return Err(BookingError::invalid("maxGroupSize must be at least 1"));
        }

        package.updated_at = Utc::now();
        if !self.packages.update(&package).await? {
            return Err(BookingError::not_found("Package"));
        }

        tracing::info!(package_id = %package.id, "Package updated");
        Ok(package)
    }

    /// Delete a package. Admin only. Existing bookings are untouched.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Forbidden`] for non-admin principals.
    /// - [`BookingError::NotFound`] if the package does not exist.
    pub async fn delete(&self, principal: &Principal, package_id: Uuid) -> Result<()> {
        require_admin(principal)?;

        if !self.packages.delete(package_id).await? {
            return Err(BookingError::not_found("Package"));
        }
        tracing::info!(package_id = %package_id, "Package deleted");
        Ok(())
    }
}

fn require_admin(principal: &Principal) -> Result<()> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(BookingError::Forbidden)
    }
}

fn validate_draft(draft: &PackageDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(BookingError::invalid("title is required"));
    }
    if draft.location.trim().is_empty() {
        return Err(BookingError::invalid("location is required"));
    }
    if draft.image.trim().is_empty() {
        return Err(BookingError::invalid("image URL is required"));
    }
    if draft.price < 0.0 {
        return Err(BookingError::invalid("price cannot be negative"));
    }
    if draft.max_group_size < 1 {
        return Err(BookingError::invalid("maxGroupSize must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::mocks::MockPackageStore;
    use crate::package::Difficulty;
    use crate::principal::Role;

    fn draft() -> PackageDraft {
        PackageDraft {
            title: "Desert Trek".to_string(),
            location: "Morocco".to_string(),
            price: 450.0,
            description: "Sahara by camel".to_string(),
            image: "https://img.example.com/sahara.jpg".to_string(),
            duration: "7 days".to_string(),
            max_group_size: 8,
            difficulty: Difficulty::Hard,
            featured: true,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(Arc::new(MockPackageStore::new()))
    }

    #[tokio::test]
    async fn writes_are_admin_only() {
        let catalog = catalog();
        let user = Principal::new(Uuid::new_v4(), Role::User);
        assert_eq!(
            catalog.create(&user, draft()).await,
            Err(BookingError::Forbidden)
        );
        assert_eq!(
            catalog
                .update(&user, Uuid::new_v4(), PackageUpdate::default())
                .await,
            Err(BookingError::Forbidden)
        );
        assert_eq!(
            catalog.delete(&user, Uuid::new_v4()).await,
            Err(BookingError::Forbidden)
        );
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let catalog = catalog();
        let admin = Principal::new(Uuid::new_v4(), Role::Admin);
        let created = catalog.create(&admin, draft()).await.expect("create");
        let fetched = catalog.get(created.id).await.expect("get");
        assert_eq!(fetched, created);
        assert_eq!(catalog.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn invalid_drafts_are_rejected() {
        let catalog = catalog();
        let admin = Principal::new(Uuid::new_v4(), Role::Admin);

        let mut negative = draft();
        negative.price = -1.0;
        assert!(matches!(
            catalog.create(&admin, negative).await,
            Err(BookingError::InvalidArgument { .. })
        ));

        let mut empty_title = draft();
        empty_title.title = "  ".to_string();
        assert!(matches!(
            catalog.create(&admin, empty_title).await,
            Err(BookingError::InvalidArgument { .. })
        ));
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields() {
        let catalog = catalog();
        let admin = Principal::new(Uuid::new_v4(), Role::Admin);
        let created = catalog.create(&admin, draft()).await.expect("create");

        let updated = catalog
            .update(
                &admin,
                created.id,
                PackageUpdate {
                    price: Some(500.0),
                    ..PackageUpdate::default()
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.price, 500.0);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.max_group_size, created.max_group_size);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let catalog = catalog();
        let admin = Principal::new(Uuid::new_v4(), Role::Admin);

        let mut second = draft();
        second.title = "Fjord Kayak".to_string();
        let first = catalog.create(&admin, draft()).await.expect("create first");
        let second = catalog.create(&admin, second).await.expect("create second");

        let listed = catalog.list().await.expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id, "newest first");
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn delete_missing_package_is_not_found() {
        let catalog = catalog();
        let admin = Principal::new(Uuid::new_v4(), Role::Admin);
        assert_eq!(
            catalog.delete(&admin, Uuid::new_v4()).await,
            Err(BookingError::not_found("Package"))
        );
    }
}
