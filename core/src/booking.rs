//! Booking entities and their read model.

use crate::error::BookingError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of a booking.
///
/// The nominal machine is `pending -> {confirmed, cancelled}`,
/// `confirmed -> completed`, with `cancelled` and `completed` terminal.
/// How strictly the machine is enforced is decided by
/// [`crate::policy::TransitionPolicy`], not by this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting admin review. Initial state of every booking.
    #[default]
    Pending,
    /// Accepted by an admin.
    Confirmed,
    /// Cancelled by an admin or by the owner while still pending.
    Cancelled,
    /// Travel completed.
    Completed,
}

impl BookingStatus {
    /// All valid statuses, in wire order. Used for error messages.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(BookingError::invalid(format!(
                "Invalid status '{other}'. Must be one of: pending, confirmed, cancelled, completed"
            ))),
        }
    }
}

/// One reservation request against one package by one identity.
///
/// `user_id`, `package_id`, and `total_price` are immutable after
/// creation; in particular `total_price` is frozen at creation time and
/// does not track later package price edits. Only `status` (and with it
/// `updated_at`) ever changes, and bookings are never physically deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque unique identifier, assigned at creation.
    pub id: Uuid,
    /// Owner; the principal that created the booking.
    pub user_id: Uuid,
    /// Referenced package. Never re-resolved for pricing.
    pub package_id: Uuid,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Calendar date requested for travel. Supplied by the requester;
    /// no past-date enforcement at this layer.
    pub booking_date: NaiveDate,
    /// Party size, at least 1. Not checked against the package's
    /// advisory capacity.
    pub number_of_people: i32,
    /// Free-text duration; defaults to the package's duration.
    pub duration: String,
    /// `package.price * number_of_people`, both read at creation time.
    pub total_price: f64,
    /// Optional free-text requests, no semantic processing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Creation timestamp, system-assigned.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp, system-assigned.
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied booking intent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// Package to book.
    pub package_id: Uuid,
    /// Requested travel date.
    pub booking_date: NaiveDate,
    /// Party size.
    pub number_of_people: i32,
    /// Duration override; falls back to the package's duration.
    pub duration: Option<String>,
    /// Optional free-text requests.
    pub special_requests: Option<String>,
}

/// Read-only view of the referenced package, resolved at query time.
///
/// Because resolution happens on every read, a package edit after booking
/// creation changes what is displayed for past bookings (title, image,
/// current price) even though the booking's `total_price` stays frozen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSnapshot {
    /// Package id.
    pub id: Uuid,
    /// Current title.
    pub title: String,
    /// Current location.
    pub location: String,
    /// Current image URI.
    pub image: String,
    /// Current duration.
    pub duration: String,
    /// Current advisory capacity.
    pub max_group_size: i32,
    /// Current per-person price. Display only; bookings keep their
    /// frozen `total_price`.
    pub price: f64,
}

impl From<&crate::package::Package> for PackageSnapshot {
    fn from(package: &crate::package::Package) -> Self {
        Self {
            id: package.id,
            title: package.title.clone(),
            location: package.location.clone(),
            image: package.image.clone(),
            duration: package.duration.clone(),
            max_group_size: package.max_group_size,
            price: package.price,
        }
    }
}

/// Read-only view of the owning identity, resolved at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    /// Identity id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// A booking together with its query-time snapshots.
///
/// `package` is absent when the referenced package has been deleted since
/// the booking was created; a listing containing one dangling booking
/// must still succeed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    /// The booking record itself.
    #[serde(flatten)]
    pub booking: Booking,
    /// Referenced package, if it still exists.
    pub package: Option<PackageSnapshot>,
    /// Owning identity, if the identity collaborator still knows it.
    pub user: Option<UserSnapshot>,
}
