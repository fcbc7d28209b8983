//! HTTP-level tests for the booking endpoints, using in-memory providers.

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
const ALICE_TOKEN: &str = "alice-token";
const BOB_TOKEN: &str = "bob-token";

struct TestApp {
    server: TestServer,
    alice: Principal,
}

fn spawn(policy: TransitionPolicy) -> TestApp {
    let identity = Arc::new(MockIdentityResolver::new());
    let admin = Principal::new(Uuid::new_v4(), Role::Admin);
    let alice = Principal::new(Uuid::new_v4(), Role::User);
    let bob = Principal::new(Uuid::new_v4(), Role::User);
    identity.add_token(ADMIN_TOKEN, admin);
    identity.add_token(ALICE_TOKEN, alice);
    identity.add_token(BOB_TOKEN, bob);
    identity.add_user(alice.id, "Alice", "alice@example.com");

    let state = AppState::new(
        Arc::new(MockBookingStore::new()),
        Arc::new(MockPackageStore::new()),
        Arc::new(MockFeedbackStore::new()),
        identity,
        policy,
    );
    let server = TestServer::new(build_router(state)).expect("test server");
    TestApp { server, alice }
}

/// Create a package through the admin API and return its id.
async fn seed_package(app: &TestApp, price: f64) -> Uuid {
    let response = app
        .server
        .post("/packages")
        .authorization_bearer(ADMIN_TOKEN)
        .json(&json!({
            "title": "Alpine Circuit",
            "location": "Switzerland",
            "price": price,
            "description": "Five passes on foot",
            "image": "https://img.example.com/alps.jpg",
            "duration": "6 days",
            "maxGroupSize": 10,
        }))
        .await;
    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    body["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("package id")
}

fn booking_body(package_id: Uuid, people: i32) -> Value {
    json!({
        "packageId": package_id,
        "bookingDate": "2026-09-01",
        "numberOfPeople": people,
    })
}

#[tokio::test]
async fn missing_or_unknown_token_is_401() {
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 100.0).await;

    let response = app
        .server
        .post("/bookings")
        .json(&booking_body(package_id, 2))
        .await;
    assert_eq!(response.status_code(), 401);

    let response = app
        .server
        .post("/bookings")
        .authorization_bearer("no-such-token")
        .json(&booking_body(package_id, 2))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn create_booking_freezes_price() {
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 100.0).await;

    let response = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(package_id, 3))
        .await;
    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["totalPrice"], 300.0);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["duration"], "6 days");
    assert_eq!(body["package"]["title"], "Alpine Circuit");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(
        body["userId"].as_str(),
        Some(app.alice.id.to_string().as_str())
    );
}

#[tokio::test]
async fn create_booking_validates_inputs() {
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 100.0).await;

    let response = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(package_id, 0))
        .await;
    assert_eq!(response.status_code(), 400);

    let response = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(Uuid::new_v4(), 2))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn listing_is_scoped_and_admin_gated() {
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 50.0).await;

    for (token, people) in [(ALICE_TOKEN, 1), (BOB_TOKEN, 2)] {
        let response = app
            .server
            .post("/bookings")
            .authorization_bearer(token)
            .json(&booking_body(package_id, people))
            .await;
        assert_eq!(response.status_code(), 201);
    }

    let own: Vec<Value> = app
        .server
        .get("/bookings/user")
        .authorization_bearer(ALICE_TOKEN)
        .await
        .json();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["numberOfPeople"], 1);

    let response = app
        .server
        .get("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .await;
    assert_eq!(response.status_code(), 403);

    let all: Vec<Value> = app
        .server
        .get("/bookings")
        .authorization_bearer(ADMIN_TOKEN)
        .await
        .json();
    assert_eq!(all.len(), 2);
    // Newest first: Bob booked last.
    assert_eq!(all[0]["numberOfPeople"], 2);
}

#[tokio::test]
async fn get_booking_enforces_ownership() {
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 50.0).await;

    let created: Value = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(package_id, 1))
        .await
        .json();
    let path = format!("/bookings/{}", created["id"].as_str().expect("id"));

    let response = app
        .server
        .get(&path)
        .authorization_bearer(BOB_TOKEN)
        .await;
    assert_eq!(response.status_code(), 403);

    let response = app
        .server
        .get(&path)
        .authorization_bearer(ADMIN_TOKEN)
        .await;
    assert_eq!(response.status_code(), 200);

    let response = app
        .server
        .get(&format!("/bookings/{}", Uuid::new_v4()))
        .authorization_bearer(ADMIN_TOKEN)
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn unknown_status_is_rejected_and_booking_unchanged() {
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 50.0).await;

    let created: Value = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(package_id, 1))
        .await
        .json();
    let path = format!("/bookings/{}", created["id"].as_str().expect("id"));

    let response = app
        .server
        .put(&path)
        .authorization_bearer(ADMIN_TOKEN)
        .json(&json!({ "status": "shipped" }))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = app
        .server
        .get(&path)
        .authorization_bearer(ADMIN_TOKEN)
        .await
        .json();
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn owner_may_only_cancel_while_pending() {
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 50.0).await;

    let created: Value = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(package_id, 1))
        .await
        .json();
    let path = format!("/bookings/{}", created["id"].as_str().expect("id"));

    let response = app
        .server
        .put(&path)
        .authorization_bearer(ALICE_TOKEN)
        .json(&json!({ "status": "confirmed" }))
        .await;
    assert_eq!(response.status_code(), 403);

    let response = app
        .server
        .put(&path)
        .authorization_bearer(ALICE_TOKEN)
        .json(&json!({ "status": "cancelled" }))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "cancelled");
}

#[tokio::test]
async fn admin_transitions_depend_on_policy() {
    // Permissive (default): cancelled can be resurrected.
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 50.0).await;
    let created: Value = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(package_id, 1))
        .await
        .json();
    let path = format!("/bookings/{}", created["id"].as_str().expect("id"));

    for (status, expected) in [("cancelled", 200), ("confirmed", 200)] {
        let response = app
            .server
            .put(&path)
            .authorization_bearer(ADMIN_TOKEN)
            .json(&json!({ "status": status }))
            .await;
        assert_eq!(response.status_code(), expected);
    }

    // Strict: the same sequence stops at the terminal state.
    let app = spawn(TransitionPolicy::Strict);
    let package_id = seed_package(&app, 50.0).await;
    let created: Value = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(package_id, 1))
        .await
        .json();
    let path = format!("/bookings/{}", created["id"].as_str().expect("id"));

    for (status, expected) in [("cancelled", 200), ("confirmed", 400)] {
        let response = app
            .server
            .put(&path)
            .authorization_bearer(ADMIN_TOKEN)
            .json(&json!({ "status": status }))
            .await;
        assert_eq!(response.status_code(), expected);
    }
}

#[tokio::test]
async fn deleted_package_leaves_bookings_readable() {
    let app = spawn(TransitionPolicy::Permissive);
    let package_id = seed_package(&app, 80.0).await;

    let response = app
        .server
        .post("/bookings")
        .authorization_bearer(ALICE_TOKEN)
        .json(&booking_body(package_id, 2))
        .await;
    assert_eq!(response.status_code(), 201);

    let response = app
        .server
        .delete(&format!("/packages/{package_id}"))
        .authorization_bearer(ADMIN_TOKEN)
        .await;
    assert_eq!(response.status_code(), 200);

    let own: Vec<Value> = app
        .server
        .get("/bookings/user")
        .authorization_bearer(ALICE_TOKEN)
        .await
        .json();
    assert_eq!(own.len(), 1);
    assert!(own[0]["package"].is_null());
    assert_eq!(own[0]["totalPrice"], 160.0);
}
