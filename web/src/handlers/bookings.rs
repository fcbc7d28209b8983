//! Booking ledger endpoints.

use crate::WebResult;
use crate::extractors::CurrentUser;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;
use wayfarer_core::{BookingStatus, BookingView, NewBooking};

/// `POST /bookings` — create a booking for the caller.
///
/// The package is resolved, the total price frozen, and the booking
/// persisted as `pending`.
pub async fn create_booking(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Json(intent): Json<NewBooking>,
) -> WebResult<(StatusCode, Json<BookingView>)> {
    let view = state.ledger.create(&principal, intent).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `GET /bookings/user` — the caller's bookings, newest-first.
pub async fn list_own_bookings(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
) -> WebResult<Json<Vec<BookingView>>> {
    let views = state.ledger.list_own(&principal).await?;
    Ok(Json(views))
}

/// `GET /bookings` — every booking, newest-first. Admin only.
pub async fn list_all_bookings(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
) -> WebResult<Json<Vec<BookingView>>> {
    let views = state.ledger.list_all(&principal).await?;
    Ok(Json(views))
}

/// `GET /bookings/:id` — one booking, visible to its owner and admins.
pub async fn get_booking(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(booking_id): Path<Uuid>,
) -> WebResult<Json<BookingView>> {
    let view = state.ledger.get(&principal, booking_id).await?;
    Ok(Json(view))
}

/// Body of `PUT /bookings/:id`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status as its wire name.
    pub status: String,
}

/// `PUT /bookings/:id` — move a booking to a new status.
///
/// The status string is validated here (unknown values are a 400 and
/// leave the booking untouched); whether the caller may perform the
/// transition is the transition policy's decision.
pub async fn update_booking_status(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> WebResult<Json<BookingView>> {
    let target: BookingStatus = request.status.parse()?;
    let view = state
        .ledger
        .set_status(&principal, booking_id, target)
        .await?;
    Ok(Json(view))
}
