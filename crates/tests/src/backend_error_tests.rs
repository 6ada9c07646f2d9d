use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::backend::BackendClient;
use shared_types::{AppErrorKind, Booking, GENERIC_ERROR_MESSAGE};

use crate::common::{self, MockBackend};

#[tokio::test]
async fn backend_message_is_kept_verbatim() {
    let backend = MockBackend::builder()
        .respond(Method::GET, "/bookings", 400, json!({ "message": "Invalid date range" }))
        .start()
        .await;

    let err = backend
        .client(Some("tok"))
        .get_data::<Vec<Booking>>("/bookings")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Invalid date range");
}

#[tokio::test]
async fn missing_message_falls_back_to_generic_text() {
    let backend = MockBackend::builder()
        .respond(Method::GET, "/bookings", 502, json!({}))
        .start()
        .await;

    let err = backend
        .client(Some("tok"))
        .get_data::<Vec<Booking>>("/bookings")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn expired_session_maps_to_unauthorized() {
    let backend = MockBackend::builder()
        .respond(Method::GET, "/auth/me", 401, json!({ "message": "Token expired" }))
        .start()
        .await;

    let err = backend
        .client(Some("stale"))
        .get_data::<serde_json::Value>("/auth/me")
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = BackendClient::new(common::unreachable_base_url().await, Some("tok".into()));

    let err = client.get_data::<Vec<Booking>>("/bookings").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn anonymous_client_sends_no_authorization() {
    let backend = MockBackend::builder()
        .data("/bookings", json!([]))
        .start()
        .await;

    let bookings: Vec<Booking> = backend.client(None).get_data("/bookings").await.unwrap();

    assert!(bookings.is_empty());
    assert_eq!(backend.calls()[0].authorization, None);
}
