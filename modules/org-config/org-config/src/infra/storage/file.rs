//! File-backed configuration store: one `<org>.json` per key.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use org_config_sdk::{ConfigStoreClient, ConfigStoreError};
use serde_json::Value;

pub struct FileConfigStore {
    root: PathBuf,
}

impl FileConfigStore {
    /// The directory is created on first write.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, org_id: &str) -> Result<PathBuf, ConfigStoreError> {
        let valid = !org_id.is_empty()
            && org_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !org_id.starts_with('.');
        if !valid {
            return Err(ConfigStoreError::InvalidKey(org_id.to_owned()));
        }
        Ok(self.root.join(format!("{org_id}.json")))
    }
}

#[async_trait]
impl ConfigStoreClient for FileConfigStore {
    async fn get(&self, org_id: &str) -> Result<Option<Value>, ConfigStoreError> {
        let path = self.path_for(org_id)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, org_id: &str, config: &Value) -> Result<(), ConfigStoreError> {
        let path = self.path_for(org_id)?;
        tokio::fs::create_dir_all(&self.root).await?;

        // Each writer gets its own temp file; the rename is atomic and the
        // last one wins.
        let bytes = serde_json::to_vec_pretty(config)?;
        let root = self.root.clone();
        let target = path.clone();
        tokio::task::spawn_blocking(move || -> Result<(), ConfigStoreError> {
            let mut tmp = tempfile::NamedTempFile::new_in(&root)?;
            tmp.write_all(&bytes)?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| ConfigStoreError::Unavailable(format!("config write task failed: {e}")))??;

        tracing::debug!(org_id, path = %path.display(), "Config written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_put_get_persist_across_instances() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("configs");

        FileConfigStore::new(root.clone())
            .put("john-deere", &json!({"orgId": "john-deere"}))
            .await
            .unwrap();

        let reopened = FileConfigStore::new(root.clone());
        assert_eq!(
            reopened.get("john-deere").await.unwrap(),
            Some(json!({"orgId": "john-deere"}))
        );
        assert!(root.join("john-deere.json").is_file());
        assert!(!root.join("john-deere.json.tmp").exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_same_key_all_succeed() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileConfigStore::new(dir.path().to_path_buf()));
        let big = json!({"orgId": "acme", "padding": "x".repeat(64 * 1024)});
        let small = json!({"orgId": "acme"});

        for _ in 0..50 {
            let (a, b) = (Arc::clone(&store), Arc::clone(&store));
            let (big_c, small_c) = (big.clone(), small.clone());
            let first = tokio::spawn(async move { a.put("acme", &big_c).await });
            let second = tokio::spawn(async move { b.put("acme", &small_c).await });

            first.await.unwrap().unwrap();
            second.await.unwrap().unwrap();

            let stored = store.get("acme").await.unwrap().unwrap();
            assert!(stored == big || stored == small);
        }

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("acme.json")]);
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::new(dir.path().to_path_buf());
        assert!(store.get("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::new(dir.path().to_path_buf());

        for key in ["../escape", "a/b", "", ".hidden"] {
            let err = store.put(key, &json!({})).await.unwrap_err();
            assert!(matches!(err, ConfigStoreError::InvalidKey(_)), "{key}");
        }
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("acme.json"), "{nope").unwrap();
        let store = FileConfigStore::new(dir.path().to_path_buf());

        let err = store.get("acme").await.unwrap_err();
        assert!(matches!(err, ConfigStoreError::Serialization(_)));
    }
}
