//! Shared application state.

use std::sync::Arc;
use wayfarer_core::{
    BookingLedger, BookingStore, Catalog, FeedbackDesk, FeedbackStore, IdentityResolver,
    PackageStore, TransitionPolicy,
};

/// State shared across all HTTP handlers, cloned cheaply per request.
///
/// Built from trait objects so tests can wire in the in-memory mocks from
/// `wayfarer_core::mocks` and production can wire in the PostgreSQL
/// providers, without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    /// Booking ledger service.
    pub ledger: BookingLedger,
    /// Catalog service.
    pub catalog: Catalog,
    /// Feedback desk service.
    pub feedback: FeedbackDesk,
    /// Identity collaborator, used by the extractors to resolve bearer
    /// tokens into principals.
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    /// Wire up services over the given providers.
    #[must_use]
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        packages: Arc<dyn PackageStore>,
        feedback: Arc<dyn FeedbackStore>,
        identity: Arc<dyn IdentityResolver>,
        policy: TransitionPolicy,
    ) -> Self {
        let ledger = BookingLedger::new(
            bookings,
            Arc::clone(&packages),
            Arc::clone(&identity),
            policy,
        );
        let catalog = Catalog::new(packages);
        let feedback = FeedbackDesk::new(feedback);
        Self {
            ledger,
            catalog,
            feedback,
            identity,
        }
    }
}
