//! Boundary traits of the org-config module.

use async_trait::async_trait;

use crate::error::ConfigStoreError;

/// Key-value store of organization configuration blobs.
///
/// Values are opaque JSON; callers decide how to interpret them.
///
/// ```ignore
/// store.put("acme", &serde_json::json!({"orgId": "acme"})).await?;
/// let blob = store.get("acme").await?; // Some(..)
/// let none = store.get("ghost").await?; // None
/// ```
#[async_trait]
pub trait ConfigStoreClient: Send + Sync {
    /// Get the blob stored under `org_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigStoreError`] on transport, serialization or storage
    /// failures. A missing key is reported as `Ok(None)`.
    async fn get(&self, org_id: &str) -> Result<Option<serde_json::Value>, ConfigStoreError>;

    /// Store `config` under `org_id`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigStoreError`] when the value could not be persisted.
    async fn put(&self, org_id: &str, config: &serde_json::Value) -> Result<(), ConfigStoreError>;
}

/// Presentation-layer variable store.
///
/// Theme application pushes each theme token as a named variable
/// (`--color-primary`, `--radius-md`, ...).
pub trait ThemeSink: Send + Sync {
    /// Set `name` to `value`, replacing any previous value.
    fn set_variable(&self, name: &str, value: &str);
}
