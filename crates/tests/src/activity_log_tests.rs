use axum::http::Method;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::activity;
use server::backend::BackendClient;
use shared_types::{
    ActivityLog, ActivityLogFilters, ActivityLogPatch, ActivityLogStats, Effect, ListController,
    Notice, Severity, CLEAR_SUCCESS_MESSAGE,
};

use crate::common::{self, MockBackend};

type Logs = ListController<ActivityLogFilters, ActivityLog, ActivityLogStats>;

fn log_page() -> serde_json::Value {
    json!({
        "data": [
            {
                "_id": "l1",
                "user": { "_id": "u1", "name": "Grace Hopper" },
                "userRole": "superadmin",
                "action": "LOGIN",
                "description": "Signed in",
                "severity": "low",
                "ipAddress": "10.0.0.1",
                "createdAt": "2026-10-01T08:00:00Z"
            }
        ],
        "stats": { "totalLogs": 1, "criticalLogs": 0, "highLogs": 0, "todayLogs": 1 },
        "pagination": common::pagination(1, 3, 41)
    })
}

/// Carry out effects the way the page does, returning the notices raised.
async fn run(client: &BackendClient, logs: &mut Logs, effects: Vec<Effect<ActivityLogFilters>>) -> Vec<Notice> {
    let mut notices = Vec::new();
    let mut queue = effects;
    while !queue.is_empty() {
        let mut next = Vec::new();
        for effect in queue {
            match effect {
                Effect::Fetch { ticket, criteria, .. } => {
                    let result = activity::list_logs(client, &criteria).await;
                    logs.receive(ticket, result);
                }
                Effect::ClearAll => {
                    let result = activity::clear_all(client).await;
                    next.extend(logs.clear_finished(result));
                }
                Effect::Notify(notice) => notices.push(notice),
            }
        }
        queue = next;
    }
    notices
}

async fn backend() -> MockBackend {
    MockBackend::builder()
        .respond(Method::GET, "/activity-logs", 200, log_page())
        .respond(Method::DELETE, "/activity-logs", 200, json!({ "message": "Cleared" }))
        .start()
        .await
}

#[tokio::test]
async fn list_reads_items_stats_and_backend_pagination() {
    let backend = backend().await;
    let client = backend.client(Some("tok"));
    let mut logs = Logs::default();

    let effect = logs.refresh();
    run(&client, &mut logs, vec![effect]).await;

    let page = logs.page().value().unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].actor(), "Grace Hopper");
    assert_eq!(page.stats.as_ref().map(|s| s.total_logs), Some(1));
    assert!(logs.has_next());
    assert!(!logs.has_prev());
    assert_eq!(page.pagination.total_items, 41);
}

#[tokio::test]
async fn filters_reach_the_backend_as_query_parameters() {
    let backend = backend().await;
    let client = backend.client(Some("tok"));
    let mut logs = Logs::default();

    let effect = logs
        .apply(ActivityLogPatch::Severity(Some(Severity::Critical)))
        .unwrap();
    run(&client, &mut logs, vec![effect]).await;

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].query.as_deref(),
        Some("severity=critical&page=1&limit=20&sortBy=createdAt&sortOrder=desc")
    );
}

#[tokio::test]
async fn cancelling_the_dialog_sends_nothing() {
    let backend = backend().await;
    let mut logs = Logs::default();

    logs.open_clear_dialog();
    logs.cancel_clear();
    assert!(logs.confirm_clear().is_none());

    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn confirmed_clear_deletes_once_then_refetches_once() {
    let backend = backend().await;
    let client = backend.client(Some("tok"));
    let mut logs = Logs::default();

    logs.open_clear_dialog();
    let effect = logs.confirm_clear().unwrap();
    let notices = run(&client, &mut logs, vec![effect]).await;

    assert_eq!(notices, vec![Notice::success(CLEAR_SUCCESS_MESSAGE)]);
    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!((calls[0].method.clone(), calls[0].path.as_str()), (Method::DELETE, "/activity-logs"));
    assert_eq!((calls[1].method.clone(), calls[1].path.as_str()), (Method::GET, "/activity-logs"));
    assert!(!logs.is_clearing());
}

#[tokio::test]
async fn failed_clear_shows_backend_message_without_refetch() {
    let backend = MockBackend::builder()
        .respond(Method::DELETE, "/activity-logs", 403, json!({ "message": "Superadmin only" }))
        .start()
        .await;
    let client = backend.client(Some("tok"));
    let mut logs = Logs::default();

    logs.open_clear_dialog();
    let effect = logs.confirm_clear().unwrap();
    let notices = run(&client, &mut logs, vec![effect]).await;

    assert_eq!(notices, vec![Notice::error("Superadmin only")]);
    assert_eq!(backend.count(Method::GET, "/activity-logs"), 0);
}

#[tokio::test]
async fn export_renders_backend_records_as_csv() {
    let backend = MockBackend::builder()
        .data(
            "/activity-logs/export",
            json!([
                { "action": "LOGIN", "severity": "low", "user": { "name": "Ada" } },
                { "action": "DELETE_USER", "severity": "high" }
            ]),
        )
        .start()
        .await;
    let client = backend.client(Some("tok"));

    let mut filters = ActivityLogFilters::default();
    filters.severity = Some(Severity::High);
    filters.start_date = NaiveDate::from_ymd_opt(2026, 10, 1);
    filters.end_date = NaiveDate::from_ymd_opt(2026, 10, 31);

    let csv = activity::export_csv(&client, &filters).await.unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "action,severity,user");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], r#""LOGIN","low",{"name":"Ada"}"#);
    assert_eq!(lines[2], r#""DELETE_USER","high","#);

    let calls = backend.calls();
    assert_eq!(calls[0].query.as_deref(), Some("startDate=2026-10-01&endDate=2026-10-31"));
}
