//! HTTP-level tests for the feedback endpoints.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;
use wayfarer_core::mocks::{
    MockBookingStore, MockFeedbackStore, MockIdentityResolver, MockPackageStore,
};
use wayfarer_core::{Principal, Role, TransitionPolicy};
use wayfarer_web::{AppState, build_router};

const ADMIN_TOKEN: &str = "admin-token";
const USER_TOKEN: &str = "user-token";

fn spawn() -> TestServer {
    let identity = Arc::new(MockIdentityResolver::new());
    identity.add_token(ADMIN_TOKEN, Principal::new(Uuid::new_v4(), Role::Admin));
    identity.add_token(USER_TOKEN, Principal::new(Uuid::new_v4(), Role::User));

    let state = AppState::new(
        Arc::new(MockBookingStore::new()),
        Arc::new(MockPackageStore::new()),
        Arc::new(MockFeedbackStore::new()),
        identity,
        TransitionPolicy::Permissive,
    );
    TestServer::new(build_router(state)).expect("test server")
}

fn submission(subject: &str) -> Value {
    json!({
        "name": "Mara",
        "email": "mara@example.com",
        "subject": subject,
        "message": "The booking form loses my date on refresh.",
    })
}

#[tokio::test]
async fn anyone_may_submit() {
    let server = spawn();
    let response = server.post("/feedback").json(&submission("Form bug")).await;
    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["status"], "pending");
    assert_eq!(body["subject"], "Form bug");
}

#[tokio::test]
async fn blank_submission_is_400() {
    let server = spawn();
    let mut blank = submission("Subject");
    blank["message"] = json!("   ");
    let response = server.post("/feedback").json(&blank).await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn listing_is_admin_gated() {
    let server = spawn();
    server.post("/feedback").json(&submission("First")).await;
    server.post("/feedback").json(&submission("Second")).await;

    let response = server.get("/feedback").await;
    assert_eq!(response.status_code(), 401);

    let response = server.get("/feedback").authorization_bearer(USER_TOKEN).await;
    assert_eq!(response.status_code(), 403);

    let list: Vec<Value> = server
        .get("/feedback")
        .authorization_bearer(ADMIN_TOKEN)
        .await
        .json();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["subject"], "Second", "newest first");
}

#[tokio::test]
async fn admin_updates_status() {
    let server = spawn();
    let created: Value = server
        .post("/feedback")
        .json(&submission("Subject"))
        .await
        .json();
    let path = format!("/feedback/{}", created["id"].as_str().expect("id"));

    let response = server
        .put(&path)
        .authorization_bearer(ADMIN_TOKEN)
        .json(&json!({ "status": "archived" }))
        .await;
    assert_eq!(response.status_code(), 400);

    let response = server
        .put(&path)
        .authorization_bearer(ADMIN_TOKEN)
        .json(&json!({ "status": "resolved" }))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "resolved");

    let response = server
        .put(&format!("/feedback/{}", Uuid::new_v4()))
        .authorization_bearer(ADMIN_TOKEN)
        .json(&json!({ "status": "resolved" }))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn admin_deletes_entries() {
    let server = spawn();
    let created: Value = server
        .post("/feedback")
        .json(&submission("Subject"))
        .await
        .json();
    let path = format!("/feedback/{}", created["id"].as_str().expect("id"));

    let response = server.delete(&path).authorization_bearer(USER_TOKEN).await;
    assert_eq!(response.status_code(), 403);

    let response = server.delete(&path).authorization_bearer(ADMIN_TOKEN).await;
    assert_eq!(response.status_code(), 200);

    let response = server.delete(&path).authorization_bearer(ADMIN_TOKEN).await;
    assert_eq!(response.status_code(), 404);
}
