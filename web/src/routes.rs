//! Router configuration.

use crate::handlers::{bookings, feedback, health, packages};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the complete router.
///
/// Paths mirror the reference API. `/bookings/user` is registered
/// alongside `/bookings/:id`; axum matches the literal segment first, so
/// the order here does not matter the way it did in the Express original.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Booking ledger
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings", get(bookings::list_all_bookings))
        .route("/bookings/user", get(bookings::list_own_bookings))
        .route("/bookings/:id", get(bookings::get_booking))
        .route("/bookings/:id", put(bookings::update_booking_status))
        // Catalog
        .route("/packages", get(packages::list_packages))
        .route("/packages", post(packages::create_package))
        .route("/packages/:id", get(packages::get_package))
        .route("/packages/:id", put(packages::update_package))
        .route("/packages/:id", delete(packages::delete_package))
        // Feedback
        .route("/feedback", post(feedback::submit_feedback))
        .route("/feedback", get(feedback::list_feedback))
        .route("/feedback/:id", put(feedback::update_feedback_status))
        .route("/feedback/:id", delete(feedback::delete_feedback))
        // Probes
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .layer(correlation_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
