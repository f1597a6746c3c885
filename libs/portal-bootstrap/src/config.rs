//! Layered configuration loading.
//!
//! Order of precedence (lowest first):
//! 1. `T::default()`
//! 2. YAML file passed with `--config`
//! 3. `APP__*` environment variables (`__` separates nesting levels)
//! 4. Legacy single-variable aliases (see [`EnvAlias`])
//!
//! CLI overrides are applied by the binary on the extracted value.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of environment variables merged into the configuration.
pub const ENV_PREFIX: &str = "APP__";

/// Errors produced while loading or rendering configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to parse configuration: {0}")]
    Invalid(#[source] Box<figment::Error>),

    #[error("failed to render configuration as YAML: {0}")]
    Render(String),
}

impl From<figment::Error> for ConfigLoadError {
    fn from(e: figment::Error) -> Self {
        Self::Invalid(Box::new(e))
    }
}

/// Maps a bare environment variable onto a dotted configuration key.
///
/// `EnvAlias::new("ORG_ID", "resolver.default_org_id")` lets deployments keep
/// setting `ORG_ID` instead of `APP__RESOLVER__DEFAULT_ORG_ID`.
#[derive(Debug, Clone, Copy)]
pub struct EnvAlias {
    pub var: &'static str,
    pub key: &'static str,
}

impl EnvAlias {
    #[must_use]
    pub const fn new(var: &'static str, key: &'static str) -> Self {
        Self { var, key }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8787".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Replaces the port of `bind_addr`, keeping the host part.
    pub fn set_port(&mut self, port: u16) {
        let host = self
            .bind_addr
            .rsplit_once(':')
            .map_or(self.bind_addr.as_str(), |(host, _)| host);
        self.bind_addr = format!("{host}:{port}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `org_config=debug,info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Load configuration of type `T` from all layers.
///
/// # Errors
///
/// Returns [`ConfigLoadError::MissingFile`] when `path` does not point at a
/// file and [`ConfigLoadError::Invalid`] when any layer fails to parse or the
/// merged result does not match `T`.
pub fn load_layered<T>(path: Option<&Path>, aliases: &[EnvAlias]) -> Result<T, ConfigLoadError>
where
    T: Default + Serialize + DeserializeOwned,
{
    let mut figment = Figment::from(Serialized::defaults(T::default()));

    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigLoadError::MissingFile(path.to_path_buf()));
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    // An alias set to the empty string counts as unset.
    for alias in aliases {
        if std::env::var_os(alias.var).is_none_or(|v| v.is_empty()) {
            continue;
        }
        let key = alias.key;
        figment = figment.merge(Env::raw().only(&[alias.var]).map(move |_| key.into()));
    }

    let config = figment.extract()?;
    tracing::debug!(file = ?path, "Configuration loaded");
    Ok(config)
}

/// Render configuration as YAML.
///
/// # Errors
///
/// Returns [`ConfigLoadError::Render`] if serialization fails.
pub fn to_yaml<T: Serialize>(config: &T) -> Result<String, ConfigLoadError> {
    serde_saphyr::to_string(config).map_err(|e| ConfigLoadError::Render(e.to_string()))
}
