//! Configuration for the Org-Config module.

use std::path::PathBuf;
use std::time::Duration;

use org_config_sdk::DEFAULT_ORG_ID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    File,
}

/// Backing store of the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub kind: StoreKind,
    /// Directory holding `<org>.json` files. Used by the `file` kind only.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::Memory,
            path: PathBuf::from("data/org-configs"),
        }
    }
}

/// Settings of the organization config resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Org id resolved when the caller does not name one.
    #[serde(default = "default_org_id")]
    pub default_org_id: String,

    /// Base URL of the config API used by the HTTP-backed store.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Upper bound for a single store fetch.
    #[serde(
        default = "default_fetch_timeout",
        with = "portal_bootstrap::humantime_serde"
    )]
    pub fetch_timeout: Duration,
}

fn default_org_id() -> String {
    DEFAULT_ORG_ID.to_owned()
}

fn default_api_url() -> String {
    "http://localhost:8787".to_owned()
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_org_id: default_org_id(),
            api_url: default_api_url(),
            fetch_timeout: default_fetch_timeout(),
        }
    }
}

/// Cross-origin policy of the REST API. An empty list allows any origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.default_org_id, "default");
        assert_eq!(cfg.api_url, "http://localhost:8787");
        assert_eq!(cfg.fetch_timeout, Duration::from_secs(5));

        let store = StoreConfig::default();
        assert_eq!(store.kind, StoreKind::Memory);
        assert!(CorsConfig::default().allowed_origins.is_empty());
    }

    #[test]
    fn test_partial_resolver_config_keeps_defaults() {
        let cfg: ResolverConfig =
            serde_json::from_str(r#"{"default_org_id":"kubota","fetch_timeout":"750ms"}"#)
                .unwrap();
        assert_eq!(cfg.default_org_id, "kubota");
        assert_eq!(cfg.api_url, "http://localhost:8787");
        assert_eq!(cfg.fetch_timeout, Duration::from_millis(750));
    }

    #[test]
    fn test_unknown_store_field_rejected() {
        let res: Result<StoreConfig, _> =
            serde_json::from_str(r#"{"kind":"file","path":"/tmp/x","ttl":"1s"}"#);
        assert!(res.is_err());
    }
}
