//! Build-time configuration.
//!
//! The frontend is a static WASM bundle, so every option is baked in when it
//! is compiled: [`AppConfig::from_build_env`] reads `PODIUM_*` variables with
//! `option_env!`. [`AppConfig::from_lookup`] does the actual parsing and is
//! what the tests drive.

use serde::Serialize;

use crate::errors::ConfigError;
use crate::log::warn;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_STORAGE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
pub const DEFAULT_PROBE_TIMEOUT_MS: u32 = 10_000;

/// Identity provider settings, serialized in the shape the provider's SDK
/// expects for its `initializeApp` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl IdentityConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.project_id.is_empty()
    }
}

/// Object-storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub endpoint: String,
    pub project: String,
    /// The bucket pages upload presentation assets into.
    pub bucket: String,
}

impl StorageConfig {
    pub fn files_url(&self, bucket: &str) -> String {
        format!("{}/storage/buckets/{bucket}/files", self.endpoint)
    }

    pub fn file_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{key}", self.files_url(bucket))
    }

    pub fn file_view_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/view?project={}", self.file_url(bucket, key), self.project)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub identity: IdentityConfig,
    pub storage: StorageConfig,
    pub backend_url: String,
    pub probe_timeout_ms: u32,
    /// Suppress the browser's context menu across the whole page.
    pub disable_context_menu: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| build_var(key).map(str::to_string))
    }

    /// Build the configuration from an arbitrary key lookup. Empty values count
    /// as unset; malformed values are logged and replaced by their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let text = |key: &str| var(key).unwrap_or_default();

        let probe_timeout_ms = var("PODIUM_PROBE_TIMEOUT_MS")
            .map(|value| parse_millis("PODIUM_PROBE_TIMEOUT_MS", &value))
            .transpose()
            .unwrap_or_else(|err| {
                warn!("{err}; using {DEFAULT_PROBE_TIMEOUT_MS}ms");
                None
            })
            .unwrap_or(DEFAULT_PROBE_TIMEOUT_MS);

        let disable_context_menu = var("PODIUM_DISABLE_CONTEXT_MENU")
            .map(|value| parse_flag("PODIUM_DISABLE_CONTEXT_MENU", &value))
            .transpose()
            .unwrap_or_else(|err| {
                warn!("{err}; keeping the context menu disabled");
                None
            })
            .unwrap_or(true);

        Self {
            identity: IdentityConfig {
                api_key: text("PODIUM_API_KEY"),
                auth_domain: text("PODIUM_AUTH_DOMAIN"),
                project_id: text("PODIUM_PROJECT_ID"),
                storage_bucket: text("PODIUM_STORAGE_BUCKET"),
                messaging_sender_id: text("PODIUM_MESSAGING_SENDER_ID"),
                app_id: text("PODIUM_APP_ID"),
            },
            storage: StorageConfig {
                endpoint: var("PODIUM_STORAGE_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_STORAGE_ENDPOINT.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                project: text("PODIUM_STORAGE_PROJECT"),
                bucket: text("PODIUM_STORAGE_BUCKET_KEY"),
            },
            backend_url: var("PODIUM_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            probe_timeout_ms,
            disable_context_menu,
        }
    }

    /// Settings that are missing but needed for a fully working shell.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.identity.is_configured() {
            missing.push("PODIUM_API_KEY/PODIUM_PROJECT_ID");
        }
        if self.storage.project.is_empty() {
            missing.push("PODIUM_STORAGE_PROJECT");
        }
        if self.storage.bucket.is_empty() {
            missing.push("PODIUM_STORAGE_BUCKET_KEY");
        }
        missing
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(millis) if millis > 0 => Ok(millis),
        _ => Err(ConfigError::InvalidDuration {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

fn build_var(key: &str) -> Option<&'static str> {
    match key {
        "PODIUM_API_KEY" => option_env!("PODIUM_API_KEY"),
        "PODIUM_AUTH_DOMAIN" => option_env!("PODIUM_AUTH_DOMAIN"),
        "PODIUM_PROJECT_ID" => option_env!("PODIUM_PROJECT_ID"),
        "PODIUM_STORAGE_BUCKET" => option_env!("PODIUM_STORAGE_BUCKET"),
        "PODIUM_MESSAGING_SENDER_ID" => option_env!("PODIUM_MESSAGING_SENDER_ID"),
        "PODIUM_APP_ID" => option_env!("PODIUM_APP_ID"),
        "PODIUM_STORAGE_ENDPOINT" => option_env!("PODIUM_STORAGE_ENDPOINT"),
        "PODIUM_STORAGE_PROJECT" => option_env!("PODIUM_STORAGE_PROJECT"),
        "PODIUM_STORAGE_BUCKET_KEY" => option_env!("PODIUM_STORAGE_BUCKET_KEY"),
        "PODIUM_BACKEND_URL" => option_env!("PODIUM_BACKEND_URL"),
        "PODIUM_PROBE_TIMEOUT_MS" => option_env!("PODIUM_PROBE_TIMEOUT_MS"),
        "PODIUM_DISABLE_CONTEXT_MENU" => option_env!("PODIUM_DISABLE_CONTEXT_MENU"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::default();

        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.storage.endpoint, DEFAULT_STORAGE_ENDPOINT);
        assert_eq!(config.probe_timeout_ms, DEFAULT_PROBE_TIMEOUT_MS);
        assert!(config.disable_context_menu);
        assert!(!config.identity.is_configured());
        assert_eq!(config.missing().len(), 3);
    }

    #[test]
    fn reads_every_recognized_option() {
        let config = config_from(&[
            ("PODIUM_API_KEY", "key"),
            ("PODIUM_AUTH_DOMAIN", "podium.example.com"),
            ("PODIUM_PROJECT_ID", "podium"),
            ("PODIUM_STORAGE_BUCKET", "podium.appspot.com"),
            ("PODIUM_MESSAGING_SENDER_ID", "42"),
            ("PODIUM_APP_ID", "1:42:web:abc"),
            ("PODIUM_STORAGE_ENDPOINT", "https://storage.example.com/v1/"),
            ("PODIUM_STORAGE_PROJECT", "proj"),
            ("PODIUM_STORAGE_BUCKET_KEY", "decks"),
            ("PODIUM_BACKEND_URL", "https://api.example.com"),
            ("PODIUM_PROBE_TIMEOUT_MS", "2500"),
            ("PODIUM_DISABLE_CONTEXT_MENU", "no"),
        ]);

        assert!(config.identity.is_configured());
        assert_eq!(config.identity.messaging_sender_id, "42");
        assert_eq!(config.storage.endpoint, "https://storage.example.com/v1");
        assert_eq!(config.storage.bucket, "decks");
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.probe_timeout_ms, 2500);
        assert!(!config.disable_context_menu);
        assert!(config.missing().is_empty());
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("PODIUM_PROBE_TIMEOUT_MS", "soon"),
            ("PODIUM_DISABLE_CONTEXT_MENU", "maybe"),
        ]);

        assert_eq!(config.probe_timeout_ms, DEFAULT_PROBE_TIMEOUT_MS);
        assert!(config.disable_context_menu);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert_eq!(
            parse_millis("PODIUM_PROBE_TIMEOUT_MS", "0"),
            Err(ConfigError::InvalidDuration {
                key: "PODIUM_PROBE_TIMEOUT_MS",
                value: "0".to_string()
            })
        );
    }

    #[test]
    fn identity_config_uses_sdk_field_names() {
        let config = config_from(&[("PODIUM_API_KEY", "key"), ("PODIUM_APP_ID", "app")]);
        let json = serde_json::to_value(&config.identity).unwrap();

        assert_eq!(json["apiKey"], "key");
        assert_eq!(json["appId"], "app");
        assert!(json.get("messagingSenderId").is_some());
    }

    #[test]
    fn storage_urls() {
        let storage = StorageConfig {
            endpoint: "https://cloud.appwrite.io/v1".to_string(),
            project: "proj".to_string(),
            bucket: "decks".to_string(),
        };

        assert_eq!(
            storage.files_url("decks"),
            "https://cloud.appwrite.io/v1/storage/buckets/decks/files"
        );
        assert_eq!(
            storage.file_view_url("decks", "f1"),
            "https://cloud.appwrite.io/v1/storage/buckets/decks/files/f1/view?project=proj"
        );
    }
}
