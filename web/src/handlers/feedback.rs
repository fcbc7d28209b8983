//! Feedback endpoints. Submission is public; triage is admin-only and
//! enforced by the feedback desk service.

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
use wayfarer_core::{Feedback, FeedbackStatus, NewFeedback};

/// `POST /feedback` — submit feedback. No authentication.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(submission): Json<NewFeedback>,
) -> WebResult<(StatusCode, Json<Feedback>)> {
    let feedback = state.feedback.submit(submission).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// `GET /feedback` — every entry, newest-first. Admin only.
pub async fn list_feedback(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
) -> WebResult<Json<Vec<Feedback>>> {
    let entries = state.feedback.list(&principal).await?;
    Ok(Json(entries))
}

/// Body of `PUT /feedback/:id`.
#[derive(Debug, Deserialize)]
pub struct UpdateFeedbackStatusRequest {
    /// Target status as its wire name.
    pub status: String,
}

/// `PUT /feedback/:id` — set the triage status. Admin only.
pub async fn update_feedback_status(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(feedback_id): Path<Uuid>,
    Json(request): Json<UpdateFeedbackStatusRequest>,
) -> WebResult<Json<Feedback>> {
    let target: FeedbackStatus = request.status.parse()?;
    let feedback = state
        .feedback
        .set_status(&principal, feedback_id, target)
        .await?;
    Ok(Json(feedback))
}

/// `DELETE /feedback/:id` — remove an entry. Admin only.
pub async fn delete_feedback(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(feedback_id): Path<Uuid>,
) -> WebResult<Json<serde_json::Value>> {
    state.feedback.remove(&principal, feedback_id).await?;
    Ok(Json(serde_json::json!({ "message": "Feedback removed" })))
}
