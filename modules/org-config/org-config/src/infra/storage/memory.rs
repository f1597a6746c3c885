//! In-memory configuration store.

use async_trait::async_trait;
use dashmap::DashMap;
use org_config_sdk::{ConfigStoreClient, ConfigStoreError};
use serde_json::Value;

/// Process-local key-value store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    entries: DashMap<String, Value>,
}

impl InMemoryConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ConfigStoreClient for InMemoryConfigStore {
    async fn get(&self, org_id: &str) -> Result<Option<Value>, ConfigStoreError> {
        Ok(self.entries.get(org_id).map(|entry| entry.value().clone()))
    }

    async fn put(&self, org_id: &str, config: &Value) -> Result<(), ConfigStoreError> {
        self.entries.insert(org_id.to_owned(), config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = InMemoryConfigStore::new();
        assert!(store.get("ghost").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryConfigStore::new();
        store.put("acme", &json!({"v": 1})).await.unwrap();
        store.put("acme", &json!({"v": 2})).await.unwrap();

        assert_eq!(store.get("acme").await.unwrap(), Some(json!({"v": 2})));
        assert_eq!(store.len(), 1);
    }
}
