//! Catalog endpoints. Reads are public; writes go through the catalog
//! service, which enforces the admin requirement.

use crate::WebResult;
use crate::extractors::CurrentUser;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use wayfarer_core::{Package, PackageDraft, PackageUpdate};

/// `GET /packages` — list the catalog.
pub async fn list_packages(
    State(state): State<AppState>,
) -> WebResult<Json<Vec<Package>>> {
    let packages = state.catalog.list().await?;
    Ok(Json(packages))
}

/// `GET /packages/:id` — one package.
pub async fn get_package(
    State(state): State<AppState>,
    Path(package_id): Path<Uuid>,
) -> WebResult<Json<Package>> {
    let package = state.catalog.get(package_id).await?;
    Ok(Json(package))
}

/// `POST /packages` — create a package. Admin only.
///
/// The image is accepted as a URL; upload/CDN handling lives outside
/// this service.
pub async fn create_package(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Json(draft): Json<PackageDraft>,
) -> WebResult<(StatusCode, Json<Package>)> {
    let package = state.catalog.create(&principal, draft).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// `PUT /packages/:id` — partial update. Admin only.
pub async fn update_package(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(package_id): Path<Uuid>,
    Json(update): Json<PackageUpdate>,
) -> WebResult<Json<Package>> {
    let package = state.catalog.update(&principal, package_id, update).await?;
    Ok(Json(package))
}

/// `DELETE /packages/:id` — remove a package. Admin only. Bookings that
/// reference it keep their frozen price and show an absent snapshot.
pub async fn delete_package(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(package_id): Path<Uuid>,
) -> WebResult<Json<serde_json::Value>> {
    state.catalog.delete(&principal, package_id).await?;
    Ok(Json(serde_json::json!({ "message": "Package removed" })))
}
