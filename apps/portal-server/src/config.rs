//! Top-level configuration of the portal server.

use std::path::Path;

use org_config::{CorsConfig, ResolverConfig, StoreConfig};
use portal_bootstrap::{ConfigLoadError, EnvAlias, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Bare variables accepted alongside `APP__*`.
pub const ENV_ALIASES: &[EnvAlias] = &[
    EnvAlias::new("ORG_ID", "resolver.default_org_id"),
    EnvAlias::new("API_URL", "resolver.api_url"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub resolver: ResolverConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Layered load: defaults, YAML, `APP__*` env, then [`ENV_ALIASES`].
    ///
    /// # Errors
    /// Returns [`ConfigLoadError`] when the file is missing or any layer is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        portal_bootstrap::load_layered(path, ENV_ALIASES)
    }

    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.set_port(port);
        }
    }

    /// # Errors
    /// Returns [`ConfigLoadError::Render`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        portal_bootstrap::to_yaml(self)
    }
}
