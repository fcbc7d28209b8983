//! PostgreSQL implementations of the Wayfarer provider traits.
//!
//! Queries are built at runtime with `sqlx::query` and explicit binds,
//! so building this crate needs no live database. Schema
//! bootstrap is idempotent (`CREATE TABLE IF NOT EXISTS`) and lives in
//! [`schema::create_schema`].
//!
//! The `identity_users` / `identity_sessions` tables are the integration
//! surface of the external identity system: whatever issues tokens writes
//! rows there, and [`PostgresIdentityResolver`] only ever reads them.
//!
//! # Example
//!
//! ```ignore
//! use sqlx::postgres::PgPoolOptions;
//! use wayfarer_postgres::{create_schema, PostgresBookingStore};
//!
//! let pool = PgPoolOptions::new().connect(&database_url).await?;
//! create_schema(&pool).await?;
//! let bookings = PostgresBookingStore::new(pool.clone());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bookings;
mod feedback;
mod identity;
mod packages;
mod schema;

pub use bookings::PostgresBookingStore;
pub use feedback::PostgresFeedbackStore;
pub use identity::PostgresIdentityResolver;
pub use packages::PostgresPackageStore;
pub use schema::create_schema;

use wayfarer_core::BookingError;

/// Map a driver error into the domain taxonomy. The full message is kept
/// for server-side logging and never reaches clients.
fn db_err(e: sqlx::Error) -> BookingError {
    BookingError::Storage(e.to_string())
}
