//! Inflector configuration
//!
//! Defaults point at the public inflection service with the session cache.
//! Values can be overridden from a JSON document or `RUINFLECT_*` environment
//! variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheOptions, DEFAULT_VARIANT};

/// Base address of the inflection service
pub const DEFAULT_BASE_URL: &str = "http://export.yandex.ru/";

/// Resource path appended to the base address
pub const DEFAULT_RESOURCE_PATH: &str = "inflect.xml";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Settings used to build an [`Inflector`](crate::Inflector)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflectorConfig {
    /// Service base address, including the trailing slash
    pub base_url: String,
    /// Resource path appended to `base_url`
    pub resource_path: String,
    /// Timeout for a single fetch
    pub timeout_secs: u64,
    /// Name of the cache variant (`session`, `file`, `null`, or a registered name)
    pub cache_variant: String,
    /// Options forwarded to the cache variant
    pub cache_options: CacheOptions,
}

impl Default for InflectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_variant: DEFAULT_VARIANT.to_string(),
            cache_options: CacheOptions::new(),
        }
    }
}

impl InflectorConfig {
    /// Parses a JSON configuration; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Defaults overridden by `RUINFLECT_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from a variable lookup
    ///
    /// Recognized: `RUINFLECT_BASE_URL`, `RUINFLECT_RESOURCE_PATH`,
    /// `RUINFLECT_TIMEOUT_SECS`, `RUINFLECT_CACHE`, `RUINFLECT_CACHE_KEY`,
    /// `RUINFLECT_CACHE_DIR`. Unparseable timeouts are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup("RUINFLECT_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(path) = lookup("RUINFLECT_RESOURCE_PATH") {
            self.resource_path = path;
        }
        if let Some(secs) = lookup("RUINFLECT_TIMEOUT_SECS").and_then(|s| s.trim().parse().ok()) {
            self.timeout_secs = secs;
        }
        if let Some(variant) = lookup("RUINFLECT_CACHE") {
            self.cache_variant = variant;
        }
        if let Some(key) = lookup("RUINFLECT_CACHE_KEY") {
            self.cache_options.insert("key".to_string(), key);
        }
        if let Some(dir) = lookup("RUINFLECT_CACHE_DIR") {
            self.cache_options.insert("dir".to_string(), dir);
        }
        self
    }

    /// Timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = InflectorConfig::default();
        assert_eq!(config.base_url, "http://export.yandex.ru/");
        assert_eq!(config.resource_path, "inflect.xml");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.cache_variant, "session");
        assert!(config.cache_options.is_empty());
    }

    #[test]
    fn test_from_json_partial() {
        let config = InflectorConfig::from_json(
            r#"{"cache_variant": "file", "cache_options": {"key": "APP"}}"#,
        )
        .expect("Should parse");
        assert_eq!(config.cache_variant, "file");
        assert_eq!(config.cache_options.get("key").map(String::as_str), Some("APP"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(InflectorConfig::from_json("{").is_err());
    }

    #[test]
    fn test_overrides_apply() {
        let vars: HashMap<&str, &str> = [
            ("RUINFLECT_BASE_URL", "http://localhost:8080/"),
            ("RUINFLECT_TIMEOUT_SECS", "10"),
            ("RUINFLECT_CACHE", "null"),
            ("RUINFLECT_CACHE_KEY", "NS"),
        ]
        .into_iter()
        .collect();
        let config = InflectorConfig::default()
            .with_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.cache_variant, "null");
        assert_eq!(config.cache_options.get("key").map(String::as_str), Some("NS"));
        assert_eq!(config.resource_path, DEFAULT_RESOURCE_PATH);
    }

    #[test]
    fn test_bad_timeout_override_is_ignored() {
        let config = InflectorConfig::default().with_overrides(|name| {
            (name == "RUINFLECT_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
