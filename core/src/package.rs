//! Package entities owned by the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty rating of a travel package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for anyone.
    Easy,
    /// Some fitness required.
    #[default]
    Medium,
    /// Experienced travellers only.
    Hard,
}

impl Difficulty {
    /// Wire name of the rating.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse a wire name, falling back to the default for anything
    /// unrecognized (the reference schema does the same).
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

/// A travel offering with price, duration, and capacity metadata.
///
/// Packages are mutated exclusively through the catalog (admin-only
/// writes). The booking ledger reads `price`, `duration`, and
/// `max_group_size` at booking-creation time and never writes back;
/// in particular no capacity is decremented when a booking is made —
/// `max_group_size` is advisory metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Opaque unique identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Destination, free text.
    pub location: String,
    /// Per-person price. Non-negative.
    pub price: f64,
    /// Long-form description.
    pub description: String,
    /// Image URI. Upload/CDN concerns live outside this service; the
    /// catalog stores whatever URI it is handed.
    pub image: String,
    /// Free-text duration, e.g. "5 days".
    pub duration: String,
    /// Advisory capacity, at least 1.
    pub max_group_size: i32,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Whether the package is featured on the landing page.
    pub featured: bool,
    /// Creation timestamp, system-assigned.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp, system-assigned.
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a package.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDraft {
    /// Display title.
    pub title: String,
    /// Destination.
    pub location: String,
    /// Per-person price.
    pub price: f64,
    /// Long-form description.
    pub description: String,
    /// Image URI.
    pub image: String,
    /// Free-text duration.
    pub duration: String,
    /// Advisory capacity.
    pub max_group_size: i32,
    /// Difficulty rating; defaults to medium.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Featured flag; defaults to false.
    #[serde(default)]
    pub featured: bool,
}

/// Partial update of a package. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageUpdate {
    /// New title, if changing.
    pub title: Option<String>,
    /// New location, if changing.
    pub location: Option<String>,
    /// New per-person price, if changing. Does not re-price existing
    /// bookings.
    pub price: Option<f64>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New image URI, if changing.
    pub image: Option<String>,
    /// New duration, if changing.
    pub duration: Option<String>,
    /// New advisory capacity, if changing.
    pub max_group_size: Option<i32>,
    /// New difficulty, if changing.
    pub difficulty: Option<Difficulty>,
    /// New featured flag, if changing.
    pub featured: Option<bool>,
}
