use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::dashboard::{aggregate, fetch_collections};
use shared_types::{AppErrorKind, Collection, CustomerStats, HcsStats, SuperadminStats};
use std::time::{Duration, Instant};

use crate::common::{self, MockBackend};

fn three_bookings() -> serde_json::Value {
    json!([
        common::booking("b1", "completed", 10.0, "2026-09-02T09:00:00Z"),
        common::booking("b2", "completed", 30.0, "2026-10-01T09:00:00Z"),
        common::booking("b3", "pending", 25.0, "2026-10-05T09:00:00Z"),
    ])
}

#[tokio::test]
async fn customer_dashboard_counts_completed_revenue() {
    let backend = MockBackend::builder()
        .data("/bookings", three_bookings())
        .start()
        .await;

    let stats: CustomerStats = aggregate(&backend.client(Some("tok"))).await.unwrap();

    assert_eq!(stats.counts.total_bookings, 3);
    assert_eq!(stats.counts.completed_bookings, 2);
    assert_eq!(stats.counts.pending_bookings, 1);
    assert_eq!(stats.counts.revenue, 40.0);
    assert_eq!(stats.completion_rate, 66.7);
    assert_eq!(stats.upcoming_bookings, 1);
    assert_eq!(stats.recent_bookings.len(), 3);
    assert_eq!(backend.count(Method::GET, "/bookings"), 1);
}

#[tokio::test]
async fn bearer_token_is_forwarded() {
    let backend = MockBackend::builder()
        .data("/bookings", json!([]))
        .start()
        .await;

    let _: CustomerStats = aggregate(&backend.client(Some("abc123"))).await.unwrap();

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer abc123"));
}

#[tokio::test]
async fn empty_collections_produce_zeroed_report() {
    let backend = MockBackend::builder()
        .data("/bookings", json!([]))
        .data("/tests", json!([]))
        .start()
        .await;

    let stats: HcsStats = aggregate(&backend.client(Some("tok"))).await.unwrap();

    assert_eq!(stats.counts.total_bookings, 0);
    assert_eq!(stats.completion_rate, 0.0);
    assert_eq!(stats.average_revenue_per_completed, 0.0);
    assert!(stats.top_tests.is_empty());
}

#[tokio::test]
async fn hcs_dashboard_ranks_tests_by_bookings() {
    let backend = MockBackend::builder()
        .data("/bookings", three_bookings())
        .data(
            "/tests",
            json!([
                { "_id": "t-b1", "name": "Glucose", "price": 10.0, "createdAt": "2026-01-01T00:00:00Z" },
                { "_id": "t-b2", "name": "Lipid Panel", "price": 30.0, "createdAt": "2026-01-01T00:00:00Z" },
                { "_id": "t-none", "name": "Thyroid", "price": 45.0, "createdAt": "2026-01-01T00:00:00Z" }
            ]),
        )
        .start()
        .await;

    let stats: HcsStats = aggregate(&backend.client(Some("tok"))).await.unwrap();

    assert_eq!(stats.total_tests, 3);
    assert_eq!(stats.average_revenue_per_completed, 20.0);
    assert_eq!(stats.top_tests.last().map(|t| t.name.as_str()), Some("Thyroid"));
    assert_eq!(stats.top_tests.last().map(|t| t.bookings), Some(0));
}

#[tokio::test]
async fn one_failing_collection_fails_the_whole_report() {
    let backend = MockBackend::builder()
        .data("/bookings", three_bookings())
        .data("/tests", json!([]))
        .data("/hcs", json!([]))
        .respond(Method::GET, "/users", 500, json!({ "message": "Users service down" }))
        .start()
        .await;

    let err = aggregate::<SuperadminStats>(&backend.client(Some("tok")))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "Users service down");
}

#[tokio::test]
async fn collections_are_fetched_concurrently_once_each() {
    let delay = Duration::from_millis(300);
    let backend = MockBackend::builder()
        .data("/bookings", json!([]))
        .data("/tests", json!([]))
        .data("/users", json!([]))
        .data("/hcs", json!([]))
        .delay(delay)
        .start()
        .await;

    let plan = [
        Collection::Bookings,
        Collection::Tests,
        Collection::Users,
        Collection::Centers,
    ];
    let started = Instant::now();
    fetch_collections(&backend.client(Some("tok")), &plan)
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert!(elapsed < delay * 3, "fetches ran sequentially: {elapsed:?}");
    for path in ["/bookings", "/tests", "/users", "/hcs"] {
        assert_eq!(backend.count(Method::GET, path), 1, "{path}");
    }
}
