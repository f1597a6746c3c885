//! Domain error types for the Org-Config module.

use org_config_sdk::ConfigStoreError;
use thiserror::Error;

/// Errors surfaced by [`OrgConfigService`](super::service::OrgConfigService).
#[derive(Error, Debug)]
pub enum DomainError {
    /// The `customerId` parameter is missing or empty.
    #[error("customerId is required")]
    MissingCustomerId,

    /// The request body is not JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// No config is stored under the requested id.
    #[error("Config not found: {0}")]
    NotFound(String),

    /// Writing to the store failed.
    #[error("Failed to save config for {org_id}: {source}")]
    SaveFailed {
        org_id: String,
        #[source]
        source: ConfigStoreError,
    },

    /// Reading from the store failed.
    #[error("Failed to retrieve config for {org_id}: {source}")]
    RetrieveFailed {
        org_id: String,
        #[source]
        source: ConfigStoreError,
    },

    /// A compiled-in configuration could not be loaded.
    #[error("Failed to load bundled config {name}: {reason}")]
    BundledConfig { name: &'static str, reason: String },
}

impl DomainError {
    #[must_use]
    pub fn not_found(org_id: impl Into<String>) -> Self {
        Self::NotFound(org_id.into())
    }

    #[must_use]
    pub fn bundled(name: &'static str, reason: impl Into<String>) -> Self {
        Self::BundledConfig {
            name,
            reason: reason.into(),
        }
    }
}

/// Why a single resolver fetch did not produce a configuration.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no config stored for {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] ConfigStoreError),

    #[error("stored config is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("store fetch timed out after {}ms", .0.as_millis())]
    Timeout(std::time::Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_api_wording() {
        assert_eq!(
            DomainError::MissingCustomerId.to_string(),
            "customerId is required"
        );
        assert_eq!(
            DomainError::not_found("ghost").to_string(),
            "Config not found: ghost"
        );
    }

    #[test]
    fn test_fetch_error_wraps_store_error() {
        let err: FetchError = ConfigStoreError::Unavailable("refused".to_owned()).into();
        assert_eq!(err.to_string(), "store unavailable: refused");
    }
}
