use serde::{Deserialize, Serialize};

/// Default REST backend address used when neither `config.toml` nor
/// `BACKEND_URL` provides one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";

/// Feature flags controlling which optional behaviour is active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    /// Shows the "Export CSV" action on the activity log page.
    #[serde(default)]
    pub csv_export: bool,
}

/// Where the REST backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
        }
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.telemetry);
        assert!(!flags.csv_export);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            csv_export = true
            "#,
        )
        .unwrap();
        assert!(config.features.csv_export);
        assert!(!config.features.telemetry);
        assert_eq!(config.backend, BackendConfig::default());
    }

    #[test]
    fn deserialize_backend_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            telemetry = true

            [backend]
            base_url = "https://api.carebook.test/v1"
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
        assert_eq!(config.backend.base_url, "https://api.carebook.test/v1");
    }
}
