use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::reviews;
use shared_types::{AppErrorKind, ReviewDecision, ReviewFilters, ReviewStatus};

use crate::common::MockBackend;

fn review(id: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "user": { "_id": "u1", "name": "Ada Lovelace" },
        "hcs": { "_id": "h1", "name": "North Clinic" },
        "rating": 4,
        "comment": "Quick and friendly",
        "status": status,
        "createdAt": "2026-10-02T12:00:00Z"
    })
}

#[tokio::test]
async fn list_without_pagination_is_a_single_page() {
    let backend = MockBackend::builder()
        .data("/reviews", json!([review("r1", "pending"), review("r2", "approved")]))
        .start()
        .await;

    let page = reviews::list_reviews(&backend.client(Some("tok")), &ReviewFilters::default())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].author(), "Ada Lovelace");
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!page.pagination.has_next);
    assert!(page.stats.is_none());
}

#[tokio::test]
async fn approving_sends_one_put_with_the_decision() {
    let backend = MockBackend::builder()
        .respond(
            Method::PUT,
            "/reviews/r1",
            200,
            json!({ "data": review("r1", "approved") }),
        )
        .start()
        .await;

    let decision = ReviewDecision::new(ReviewStatus::Approved, "  Thanks!  ");
    let updated = reviews::decide(&backend.client(Some("tok")), "r1", ReviewStatus::Pending, &decision)
        .await
        .unwrap();

    assert_eq!(updated.status, ReviewStatus::Approved);
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::PUT);
    let body: serde_json::Value = serde_json::from_str(&calls[0].body).unwrap();
    assert_eq!(body, json!({ "status": "approved", "adminResponse": "Thanks!" }));
}

#[tokio::test]
async fn forbidden_transition_sends_nothing() {
    let backend = MockBackend::builder().start().await;

    let decision = ReviewDecision::new(ReviewStatus::Pending, "");
    let err = reviews::decide(&backend.client(Some("tok")), "r1", ReviewStatus::Approved, &decision)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn blank_review_id_is_rejected() {
    let backend = MockBackend::builder().start().await;

    let decision = ReviewDecision::new(ReviewStatus::Rejected, "");
    let err = reviews::decide(&backend.client(Some("tok")), "  ", ReviewStatus::Pending, &decision)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(backend.calls().is_empty());
}
