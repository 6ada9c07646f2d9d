use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::SessionToken;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "carebook-portal";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()` calls
/// `tokio::spawn`, and the init closure passed to `dioxus::serve` may run
/// outside a Tokio context.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

fn tls_config(endpoint: &str) -> Option<opentelemetry_otlp::tonic_types::transport::ClientTlsConfig> {
    endpoint
        .starts_with("https://")
        .then(|| opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots())
}

/// Exporter settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
struct ExportSettings {
    endpoint: String,
    service_name: String,
    environment: String,
}

impl ExportSettings {
    /// `None` when no collector endpoint is configured.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.trim().is_empty())?;
        Some(Self {
            endpoint,
            service_name: lookup("OTEL_SERVICE_NAME").unwrap_or_else(|| TRACER_NAME.to_string()),
            environment: lookup("DEPLOY_ENV").unwrap_or_else(|| "development".to_string()),
        })
    }

    fn resource(&self) -> opentelemetry_sdk::Resource {
        opentelemetry_sdk::Resource::builder()
            .with_service_name(self.service_name.clone())
            .with_attribute(KeyValue::new("service.version", APP_VERSION))
            .with_attribute(KeyValue::new("deployment.environment", self.environment.clone()))
            .build()
    }
}

fn otel_runtime() -> Option<&'static tokio::runtime::Runtime> {
    if let Some(rt) = OTEL_RUNTIME.get() {
        return Some(rt);
    }
    let built = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(1)
        .build();
    match built {
        Ok(rt) => Some(OTEL_RUNTIME.get_or_init(|| rt)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create OTEL runtime");
            None
        }
    }
}

fn span_exporter(endpoint: &str) -> Result<opentelemetry_otlp::SpanExporter, String> {
    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint);
    if let Some(tls) = tls_config(endpoint) {
        builder = builder.with_tls_config(tls);
    }
    builder.build().map_err(|e| e.to_string())
}

fn log_exporter(endpoint: &str) -> Result<opentelemetry_otlp::LogExporter, String> {
    let mut builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint);
    if let Some(tls) = tls_config(endpoint) {
        builder = builder.with_tls_config(tls);
    }
    builder.build().map_err(|e| e.to_string())
}

/// Export HTTP spans and `log` records to an OTLP collector.
///
/// Dioxus owns the tracing subscriber, so only the exporters are set up
/// here. Runs when the `telemetry` flag is on; without
/// `OTEL_EXPORTER_OTLP_ENDPOINT` it logs a warning and does nothing.
/// `OTEL_SERVICE_NAME` and `DEPLOY_ENV` tag the exported resource.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Some(settings) = ExportSettings::from_lookup(|key| std::env::var(key).ok()) else {
        tracing::warn!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };
    let Some(rt) = otel_runtime() else {
        return;
    };
    let _guard = rt.enter();

    let resource = settings.resource();
    let spans = match span_exporter(&settings.endpoint) {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create OTLP span exporter");
            return;
        }
    };
    global::set_tracer_provider(
        opentelemetry_sdk::trace::SdkTracerProvider::builder()
            .with_batch_exporter(spans)
            .with_resource(resource.clone())
            .build(),
    );

    let logs = match log_exporter(&settings.endpoint) {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create OTLP log exporter");
            return;
        }
    };
    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(logs)
            .with_resource(resource)
            .build()
    });
    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::warn!("Log bridge skipped, a `log` logger is already set"),
    }

    tracing::info!(
        version = APP_VERSION,
        endpoint = %settings.endpoint,
        service = %settings.service_name,
        "Telemetry initialized"
    );
}

/// Rough client class from the User-Agent, for grouping spans.
fn client_kind(user_agent: &str) -> &'static str {
    let ua = user_agent.to_ascii_lowercase();
    if ua.is_empty() {
        "unknown"
    } else if ua.contains("bot") || ua.contains("curl") || ua.contains("wget") {
        "script"
    } else if ua.contains("iphone") || ua.contains("ipad") || ua.contains("android") {
        "mobile-browser"
    } else if ua.contains("mozilla") {
        "browser"
    } else {
        "other"
    }
}

/// Collapse id segments so spans group by route: `/api/reviews/65f0c1a2` → `/api/reviews/:id`.
fn route_template(path: &str) -> String {
    path.split('/')
        .map(|seg| {
            let looks_like_id = (seg.len() >= 8 && seg.chars().all(|c| c.is_ascii_hexdigit()))
                || (!seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()));
            if looks_like_id {
                ":id"
            } else {
                seg
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Records method, route, client kind, request id, response status and
/// whether a session cookie came with the request.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let user_agent = header("user-agent").unwrap_or_default();
        let request_id = header("x-request-id").unwrap_or_default();
        let has_session = req.extensions().get::<SessionToken>().is_some();

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("client.kind", client_kind(&user_agent)),
            KeyValue::new("http.request_id", request_id),
            KeyValue::new("session.present", has_session),
        ];

        let span = tracer
            .span_builder(format!("{} {}", &method, route_template(&path)))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_kind_groups_user_agents() {
        assert_eq!(client_kind(""), "unknown");
        assert_eq!(client_kind("curl/8.4.0"), "script");
        assert_eq!(client_kind("Googlebot/2.1"), "script");
        assert_eq!(client_kind("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)"), "mobile-browser");
        assert_eq!(client_kind("Mozilla/5.0 (Macintosh; Intel Mac OS X)"), "browser");
        assert_eq!(client_kind("okhttp/4.12"), "other");
    }

    #[test]
    fn export_needs_an_endpoint() {
        assert_eq!(ExportSettings::from_lookup(|_| None), None);
        assert_eq!(
            ExportSettings::from_lookup(|k| (k == "OTEL_EXPORTER_OTLP_ENDPOINT").then(|| " ".to_string())),
            None
        );
    }

    #[test]
    fn export_settings_fall_back_to_defaults() {
        let settings = ExportSettings::from_lookup(|k| {
            (k == "OTEL_EXPORTER_OTLP_ENDPOINT").then(|| "http://collector:4317".to_string())
        });
        assert_eq!(
            settings,
            Some(ExportSettings {
                endpoint: "http://collector:4317".to_string(),
                service_name: TRACER_NAME.to_string(),
                environment: "development".to_string(),
            })
        );
    }

    #[test]
    fn route_template_collapses_ids() {
        assert_eq!(route_template("/api/reviews/65f0c1a2e4b0"), "/api/reviews/:id");
        assert_eq!(route_template("/api/list_reviews"), "/api/list_reviews");
        assert_eq!(route_template("/health"), "/health");
        assert_eq!(route_template("/dashboard/42"), "/dashboard/:id");
    }
}
