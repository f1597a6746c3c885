//! Organization configurations compiled into the binary.

use serde_json::Value;

use super::error::DomainError;

/// A named JSON document shipped with the service.
#[derive(Debug, Clone, Copy)]
pub struct BundledConfig {
    pub name: &'static str,
    pub raw: &'static str,
}

/// Configurations seeded by `POST /api/upload-local-configs`.
pub const BUNDLED_CONFIGS: &[BundledConfig] = &[
    BundledConfig {
        name: "john-deere",
        raw: include_str!("bundled/config-john-deere.json"),
    },
    BundledConfig {
        name: "new-holland",
        raw: include_str!("bundled/config-new-holland.json"),
    },
    BundledConfig {
        name: "kubota",
        raw: include_str!("bundled/config-kubota.json"),
    },
];

/// A parsed bundled document and the org id it is stored under.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub org_id: String,
    pub value: Value,
}

/// Parse every bundled document.
///
/// All-or-nothing: one unreadable document fails the whole load.
///
/// # Errors
///
/// Returns [`DomainError::BundledConfig`] when a document is not JSON or has
/// no string `orgId`.
pub fn load_all(configs: &[BundledConfig]) -> Result<Vec<LoadedConfig>, DomainError> {
    configs.iter().map(load_one).collect()
}

fn load_one(config: &BundledConfig) -> Result<LoadedConfig, DomainError> {
    let value: Value = serde_json::from_str(config.raw)
        .map_err(|e| DomainError::bundled(config.name, e.to_string()))?;
    let org_id = value
        .get("orgId")
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::bundled(config.name, "missing string orgId"))?
        .to_owned();
    Ok(LoadedConfig { org_id, value })
}
