//! Provider traits for storage and identity.
//!
//! These traits are the seams between the domain services and the outside
//! world. `wayfarer-postgres` implements them against PostgreSQL; the
//! [`crate::mocks`] module implements them in memory for tests. All three
//! are object-safe so services can hold `Arc<dyn _>` collaborators.

use crate::booking::{Booking, BookingStatus, UserSnapshot};
use crate::error::Result;
use crate::feedback::{Feedback, FeedbackStatus};
use crate::package::Package;
use crate::principal::Principal;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Persistent store for bookings.
///
/// Bookings are append-and-update only; there is deliberately no delete
/// operation.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a new booking.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BookingError::Storage`] if the write fails; a
    /// failed creation leaves no record behind.
    async fn insert(&self, booking: &Booking) -> Result<()>;

    /// Fetch one booking by id, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn get(&self, booking_id: Uuid) -> Result<Option<Booking>>;

    /// All bookings owned by `user_id`, newest-first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>>;

    /// Every booking in the store, newest-first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_all(&self) -> Result<Vec<Booking>>;

    /// Set the status (and `updated_at`) of one booking, leaving every
    /// other field untouched. Returns the updated booking, or `None` if
    /// the id does not exist. A failed update leaves the prior status
    /// intact.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Booking>>;
}

/// Persistent store for catalog packages.
#[async_trait]
pub trait PackageStore: Send + Sync {
    /// Persist a new package.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn insert(&self, package: &Package) -> Result<()>;

    /// Overwrite an existing package. Returns `false` if the id does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn update(&self, package: &Package) -> Result<bool>;

    /// Remove a package. Returns `false` if the id does not exist.
    /// Bookings referencing the package are untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn delete(&self, package_id: Uuid) -> Result<bool>;

    /// Fetch one package by id, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn get(&self, package_id: Uuid) -> Result<Option<Package>>;

    /// Every package in the catalog, newest-first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list(&self) -> Result<Vec<Package>>;
}

/// Persistent store for visitor feedback.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist a new feedback entry.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn insert(&self, feedback: &Feedback) -> Result<()>;

    /// Every feedback entry, newest-first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list(&self) -> Result<Vec<Feedback>>;

    /// Set the triage status (and `updated_at`) of one entry. Returns the
    /// updated entry, or `None` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn update_status(
        &self,
        feedback_id: Uuid,
        status: FeedbackStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Feedback>>;

    /// Remove an entry. Returns `false` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    async fn delete(&self, feedback_id: Uuid) -> Result<bool>;
}

/// Identity collaborator.
///
/// Token issuance (login, password hashing, signing) lives outside this
/// service; this trait only resolves credentials the identity system
/// already handed out.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a bearer credential into a principal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BookingError::Unauthorized`] for unknown or
    /// expired credentials.
    async fn resolve(&self, bearer_token: &str) -> Result<Principal>;

    /// Display snapshot (name, email) for a user id, `None` if the
    /// identity system no longer knows the id.
    ///
    /// # Errors
    ///
    /// Returns error if the lookup fails.
    async fn user_snapshot(&self, user_id: Uuid) -> Result<Option<UserSnapshot>>;
}
