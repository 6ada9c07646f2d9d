use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::{json, Value};
use server::backend::BackendClient;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A request the mock backend received.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: Value,
}

#[derive(Default)]
struct MockState {
    routes: HashMap<(Method, String), Canned>,
    calls: Mutex<Vec<Recorded>>,
    delay: Duration,
}

/// An in-process stand-in for the REST backend, listening on an ephemeral
/// port. Unknown routes answer 404 with a `message` body.
pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

#[derive(Default)]
pub struct MockBuilder {
    state: MockState,
}

impl MockBuilder {
    pub fn respond(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.state
            .routes
            .insert((method, path.to_string()), Canned { status, body });
        self
    }

    /// `GET path` answering 200 with `{ "data": data }`.
    pub fn data(self, path: &str, data: Value) -> Self {
        self.respond(Method::GET, path, 200, json!({ "data": data }))
    }

    /// Delay every response, to observe concurrency.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.state.delay = delay;
        self
    }

    pub async fn start(self) -> MockBackend {
        let state = Arc::new(self.state);
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        MockBackend {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let path = uri.path().trim_start_matches("/api").to_string();
    state.calls.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    match state.routes.get(&(method, path)) {
        Some(canned) => (canned.status, Json(canned.body.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" }))),
    }
}

impl MockBackend {
    pub fn builder() -> MockBuilder {
        MockBuilder::default()
    }

    /// A client for this backend carrying `token`.
    pub fn client(&self, token: Option<&str>) -> BackendClient {
        BackendClient::new(&self.base_url, token.map(str::to_string))
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

pub fn booking(id: &str, status: &str, price: f64, created_at: &str) -> Value {
    json!({
        "_id": id,
        "user": { "_id": "u1", "name": "Ada Lovelace" },
        "test": { "_id": format!("t-{id}"), "name": "Lipid Panel", "price": price },
        "hcs": { "_id": "h1", "name": "North Clinic" },
        "status": status,
        "createdAt": created_at
    })
}

pub fn pagination(current: i64, total_pages: i64, total_items: i64) -> Value {
    json!({
        "currentPage": current,
        "totalPages": total_pages,
        "totalItems": total_items,
        "hasNext": current < total_pages,
        "hasPrev": current > 1
    })
}
