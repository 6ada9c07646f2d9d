use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
///
/// If the file is missing or unparseable, every flag is off and the backend
/// URL falls back to its default. `BACKEND_URL` (from the environment or
/// `.env`) overrides the configured backend URL.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
                AppConfig::default()
            }),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
                AppConfig::default()
            }
        };
        if let Ok(url) = std::env::var("BACKEND_URL") {
            if !url.trim().is_empty() {
                config.backend.base_url = url;
            }
        }
        config.backend.base_url = config.backend.base_url.trim_end_matches('/').to_string();
        tracing::info!(
            features = ?config.features,
            backend = %config.backend.base_url,
            "Configuration loaded"
        );
        config
    });
}

/// The loaded configuration, or defaults if `load_config()` hasn't run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

/// Base URL of the REST backend, without a trailing slash.
pub fn backend_url() -> &'static str {
    &app_config().backend.base_url
}
