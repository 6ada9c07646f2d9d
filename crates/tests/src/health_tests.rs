use pretty_assertions::assert_eq;
use server::backend::BackendClient;
use server::health;

use crate::common::{self, MockBackend};

#[tokio::test]
async fn reachable_backend_reports_ok() {
    let backend = MockBackend::builder().start().await;
    health::record_start_time();

    let report = health::check(&backend.client(None)).await;

    assert_eq!(report.status, "ok");
    assert_eq!(report.backend, "reachable");
    assert!(!report.version.is_empty());
}

#[tokio::test]
async fn unreachable_backend_reports_degraded() {
    let client = BackendClient::new(common::unreachable_base_url().await, None);

    let report = health::check(&client).await;

    assert_eq!(report.status, "degraded");
    assert!(report.backend.starts_with("error:"));
}
