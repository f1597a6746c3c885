//! Domain service for the Org-Config REST API.

use std::sync::Arc;

use org_config_sdk::ConfigStoreClient;
use serde_json::Value;

use super::bundled::{self, BUNDLED_CONFIGS, BundledConfig};
use super::error::DomainError;

/// Result of storing one bundled configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Saved { org_id: String },
    Failed { org_id: String },
}

/// Domain service over the configuration store.
///
/// Wraps the store with request validation and the bulk seeding operation.
pub struct OrgConfigService {
    store: Arc<dyn ConfigStoreClient>,
    bundled: &'static [BundledConfig],
}

impl OrgConfigService {
    #[must_use]
    pub fn new(store: Arc<dyn ConfigStoreClient>) -> Self {
        Self::with_bundled(store, BUNDLED_CONFIGS)
    }

    #[must_use]
    pub fn with_bundled(store: Arc<dyn ConfigStoreClient>, bundled: &'static [BundledConfig]) -> Self {
        Self { store, bundled }
    }

    /// Store `body` under `customer_id` and return the parsed document.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingCustomerId`] for a missing or empty id
    /// - [`DomainError::InvalidBody`] when `body` is not JSON
    /// - [`DomainError::SaveFailed`] when the store rejects the write
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn add_config(&self, customer_id: Option<&str>, body: &[u8]) -> Result<Value, DomainError> {
        let org_id = require_customer_id(customer_id)?;
        let config: Value = serde_json::from_slice(body).map_err(DomainError::InvalidBody)?;

        self.store
            .put(org_id, &config)
            .await
            .map_err(|source| DomainError::SaveFailed {
                org_id: org_id.to_owned(),
                source,
            })?;

        tracing::info!(org_id, "Config saved");
        Ok(config)
    }

    /// Fetch the document stored under `customer_id`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingCustomerId`] for a missing or empty id
    /// - [`DomainError::NotFound`] when nothing is stored
    /// - [`DomainError::RetrieveFailed`] on store errors
    #[tracing::instrument(skip(self))]
    pub async fn get_config(&self, customer_id: Option<&str>) -> Result<Value, DomainError> {
        let org_id = require_customer_id(customer_id)?;

        self.store
            .get(org_id)
            .await
            .map_err(|source| DomainError::RetrieveFailed {
                org_id: org_id.to_owned(),
                source,
            })?
            .ok_or_else(|| DomainError::not_found(org_id))
    }

    /// Store every bundled configuration under its own `orgId`.
    ///
    /// Individual write failures are reported per item; they do not abort
    /// the remaining writes.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BundledConfig`] if any bundled document cannot
    /// be loaded. Nothing is written in that case.
    #[tracing::instrument(skip(self))]
    pub async fn upload_bundled(&self) -> Result<Vec<UploadOutcome>, DomainError> {
        let loaded = bundled::load_all(self.bundled)?;
        let mut outcomes = Vec::with_capacity(loaded.len());

        for cfg in loaded {
            let outcome = match self.store.put(&cfg.org_id, &cfg.value).await {
                Ok(()) => UploadOutcome::Saved { org_id: cfg.org_id },
                Err(e) => {
                    tracing::error!(org_id = %cfg.org_id, error = %e, "Failed to save bundled config");
                    UploadOutcome::Failed { org_id: cfg.org_id }
                }
            };
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

fn require_customer_id(customer_id: Option<&str>) -> Result<&str, DomainError> {
    customer_id
        .filter(|id| !id.is_empty())
        .ok_or(DomainError::MissingCustomerId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use org_config_sdk::ConfigStoreError;
    use serde_json::json;

    use crate::infra::storage::InMemoryConfigStore;

    struct FlakyStore {
        inner: InMemoryConfigStore,
        reject: &'static str,
    }

    #[async_trait]
    impl ConfigStoreClient for FlakyStore {
        async fn get(&self, org_id: &str) -> Result<Option<Value>, ConfigStoreError> {
            if org_id == self.reject {
                return Err(ConfigStoreError::Unavailable("down".to_owned()));
            }
            self.inner.get(org_id).await
        }

        async fn put(&self, org_id: &str, config: &Value) -> Result<(), ConfigStoreError> {
            if org_id == self.reject {
                return Err(ConfigStoreError::Unavailable("down".to_owned()));
            }
            self.inner.put(org_id, config).await
        }
    }

    fn service() -> (Arc<InMemoryConfigStore>, OrgConfigService) {
        let store = Arc::new(InMemoryConfigStore::new());
        (store.clone(), OrgConfigService::new(store))
    }

    #[tokio::test]
    async fn test_add_then_get_round_trips_body() {
        let (_, svc) = service();
        let saved = svc
            .add_config(Some("acme"), br#"{"orgId":"acme","x":1}"#)
            .await
            .unwrap();
        assert_eq!(saved, json!({"orgId":"acme","x":1}));

        let fetched = svc.get_config(Some("acme")).await.unwrap();
        assert_eq!(fetched, saved);
    }

    #[tokio::test]
    async fn test_add_requires_customer_id_before_body_check() {
        let (_, svc) = service();
        let err = svc.add_config(None, b"not json").await.unwrap_err();
        assert!(matches!(err, DomainError::MissingCustomerId));

        let err = svc.add_config(Some(""), b"{}").await.unwrap_err();
        assert!(matches!(err, DomainError::MissingCustomerId));
    }

    #[tokio::test]
    async fn test_add_rejects_non_json_body() {
        let (store, svc) = service();
        let err = svc.add_config(Some("acme"), b"{oops").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidBody(_)));
        assert!(store.get("acme").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let (_, svc) = service();
        let err = svc.get_config(Some("ghost")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn test_store_failures_map_to_save_and_retrieve_errors() {
        let store = Arc::new(FlakyStore {
            inner: InMemoryConfigStore::new(),
            reject: "acme",
        });
        let svc = OrgConfigService::new(store);

        assert!(matches!(
            svc.add_config(Some("acme"), b"{}").await.unwrap_err(),
            DomainError::SaveFailed { .. }
        ));
        assert!(matches!(
            svc.get_config(Some("acme")).await.unwrap_err(),
            DomainError::RetrieveFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_upload_bundled_stores_each_under_org_id() {
        let (store, svc) = service();
        let outcomes = svc.upload_bundled().await.unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| matches!(o, UploadOutcome::Saved { .. })));
        for org in ["john-deere", "new-holland", "kubota"] {
            assert!(store.get(org).await.unwrap().is_some(), "{org} missing");
        }
    }

    #[tokio::test]
    async fn test_upload_bundled_reports_partial_failure() {
        let store = Arc::new(FlakyStore {
            inner: InMemoryConfigStore::new(),
            reject: "new-holland",
        });
        let svc = OrgConfigService::new(store.clone());

        let outcomes = svc.upload_bundled().await.unwrap();
        assert_eq!(
            outcomes,
            vec![
                UploadOutcome::Saved {
                    org_id: "john-deere".to_owned()
                },
                UploadOutcome::Failed {
                    org_id: "new-holland".to_owned()
                },
                UploadOutcome::Saved {
                    org_id: "kubota".to_owned()
                },
            ]
        );
        assert!(store.inner.get("kubota").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_upload_with_broken_bundle_writes_nothing() {
        static BROKEN: &[BundledConfig] = &[
            BundledConfig {
                name: "ok",
                raw: r#"{"orgId":"ok"}"#,
            },
            BundledConfig {
                name: "broken",
                raw: "[]",
            },
        ];
        let store = Arc::new(InMemoryConfigStore::new());
        let svc = OrgConfigService::with_bundled(store.clone(), BROKEN);

        let err = svc.upload_bundled().await.unwrap_err();
        assert!(matches!(err, DomainError::BundledConfig { .. }));
        assert!(store.get("ok").await.unwrap().is_none());
    }
}
