//! In-memory provider implementations for testing.
//!
//! Each mock keeps its records behind an `Arc<Mutex<_>>` so tests can
//! clone handles freely and mutate the world between ledger calls
//! (edit a price, delete a package, revoke a token).

mod bookings;
mod feedback;
mod identity;
mod packages;

pub use bookings::MockBookingStore;
pub use feedback::MockFeedbackStore;
pub use identity::MockIdentityResolver;
pub use packages::MockPackageStore;
