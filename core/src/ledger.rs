//! The booking ledger service.
//!
//! Owns booking creation (price freezing), status transitions, and the
//! owner/admin-scoped query surface. Every method takes the resolved
//! [`Principal`] explicitly; nothing here reads ambient credential state.

use crate::booking::{Booking, BookingStatus, BookingView, NewBooking, PackageSnapshot};
use crate::error::{BookingError, Result};
use crate::policy::TransitionPolicy;
use crate::principal::Principal;
use crate::providers::{BookingStore, IdentityResolver, PackageStore};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Booking ledger over pluggable storage and identity collaborators.
#[derive(Clone)]
pub struct BookingLedger {
    bookings: Arc<dyn BookingStore>,
    packages: Arc<dyn PackageStore>,
    identity: Arc<dyn IdentityResolver>,
    policy: TransitionPolicy,
}

impl BookingLedger {
    /// Create a ledger with the given collaborators and transition policy.
    #[must_use]
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        packages: Arc<dyn PackageStore>,
        identity: Arc<dyn IdentityResolver>,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            bookings,
            packages,
            identity,
            policy,
        }
    }

    /// Create a booking for `principal` from a client-supplied intent.
    ///
    /// Resolves the package, freezes `total_price = price * people`, and
    /// persists the booking in `pending` state. Capacity is advisory:
    /// `number_of_people` is not checked against the package's
    /// `max_group_size`, and no inventory is decremented.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if the package does not exist.
    /// - [`BookingError::InvalidArgument`] if `number_of_people < 1`.
    /// - [`BookingError::Storage`] if the write fails (no record is left).
    pub async fn create(&self, principal: &Principal, intent: NewBooking) -> Result<BookingView> {
        if intent.number_of_people < 1 {
            return Err(BookingError::invalid("numberOfPeople must be at least 1"));
        }

        let package = self
            .packages
            .get(intent.package_id)
            .await?
            .ok_or(BookingError::not_found("Package"))?;

        let total_price = package.price * f64::from(intent.number_of_people);
        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            user_id: principal.id,
            package_id: package.id,
            status: BookingStatus::Pending,
            booking_date: intent.booking_date,
            number_of_people: intent.number_of_people,
            duration: intent.duration.unwrap_or_else(|| package.duration.clone()),
            total_price,
            special_requests: intent.special_requests,
            created_at: now,
            updated_at: now,
        };

        self.bookings.insert(&booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            package_id = %package.id,
            user_id = %principal.id,
            total_price,
            "Booking created"
        );

        let user = self.identity.user_snapshot(principal.id).await?;
        Ok(BookingView {
            booking,
            package: Some(PackageSnapshot::from(&package)),
            user,
        })
    }

    /// Move a booking to `target` status.
    ///
    /// Authorization is delegated entirely to the configured
    /// [`TransitionPolicy`]; this method only loads, decides, and writes.
    /// All fields other than `status` and `updated_at` are unchanged.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if the booking does not exist.
    /// - [`BookingError::Forbidden`] / [`BookingError::InvalidArgument`]
    ///   per the policy.
    pub async fn set_status(
        &self,
        principal: &Principal,
        booking_id: Uuid,
        target: BookingStatus,
    ) -> Result<BookingView> {
        let booking = self
            .bookings
            .get(booking_id)
            .await?
            .ok_or(BookingError::not_found("Booking"))?;

        self.policy.authorize(principal, &booking, target)?;

        let updated = self
            .bookings
            .update_status(booking_id, target, Utc::now())
            .await?
            .ok_or(BookingError::not_found("Booking"))?;

        tracing::info!(
            booking_id = %booking_id,
            from = %booking.status,
            to = %target,
            actor = %principal.id,
            "Booking status updated"
        );

        self.view(updated).await
    }

    /// Bookings owned by `principal`, newest-first.
    ///
    /// # Errors
    ///
    /// Returns error if the store query fails.
    pub async fn list_own(&self, principal: &Principal) -> Result<Vec<BookingView>> {
        let bookings = self.bookings.list_for_user(principal.id).await?;
        self.views(bookings).await
    }

    /// Every booking, newest-first. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Forbidden`] for non-admin principals.
    pub async fn list_all(&self, principal: &Principal) -> Result<Vec<BookingView>> {
        if !principal.is_admin() {
            return Err(BookingError::Forbidden);
        }
        let bookings = self.bookings.list_all().await?;
        self.views(bookings).await
    }

    /// One booking by id, visible to its owner and to admins.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if the id does not exist.
    /// - [`BookingError::Forbidden`] for any other principal.
    pub async fn get(&self, principal: &Principal, booking_id: Uuid) -> Result<BookingView> {
        let booking = self
            .bookings
            .get(booking_id)
            .await?
            .ok_or(BookingError::not_found("Booking"))?;

        if !principal.is_admin() && booking.user_id != principal.id {
            return Err(BookingError::Forbidden);
        }

        self.view(booking).await
    }

    /// Attach query-time package and identity snapshots to one booking.
    ///
    /// A deleted package degrades to `package: None` rather than failing
    /// the read.
    async fn view(&self, booking: Booking) -> Result<BookingView> {
        let package = self
            .packages
            .get(booking.package_id)
            .await?
            .as_ref()
            .map(PackageSnapshot::from);
        let user = self.identity.user_snapshot(booking.user_id).await?;
        Ok(BookingView {
            booking,
            package,
            user,
        })
    }

    async fn views(&self, bookings: Vec<Booking>) -> Result<Vec<BookingView>> {
        let mut views = Vec::with_capacity(bookings.len());
        for booking in bookings {
            views.push(self.view(booking).await?);
        }
        Ok(views)
    }
}
