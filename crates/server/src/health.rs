use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::backend::BackendClient;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// `GET /health`: process uptime plus whether the REST backend answers.
pub async fn health_check() -> Json<HealthResponse> {
    Json(check(&BackendClient::from_config(None)).await)
}

pub async fn check(client: &BackendClient) -> HealthResponse {
    let (status, backend) = match client.ping().await {
        Ok(()) => ("ok", "reachable".to_string()),
        Err(e) => ("degraded", format!("error: {}", e.message)),
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    HealthResponse {
        status: status.to_string(),
        backend,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
