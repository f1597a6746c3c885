//! Navigation path to remote module lookup.

use std::sync::Arc;

use org_config_sdk::RemoteModuleConfig;

use super::resolver::ConfigResolver;

/// Finds the remote module registered for a navigation path.
pub struct RemoteModuleRouter {
    resolver: Arc<ConfigResolver>,
}

impl RemoteModuleRouter {
    #[must_use]
    pub fn new(resolver: Arc<ConfigResolver>) -> Self {
        Self { resolver }
    }

    /// Look up the remote module for `path` (`"/remote"` and `"remote"` are
    /// equivalent).
    ///
    /// Uses the cached configuration when one is present, whatever org it
    /// belongs to; otherwise resolves the default org first.
    pub async fn remote_module_for_path(&self, path: &str) -> Option<RemoteModuleConfig> {
        let route_key = route_key(path);

        let config = match self.resolver.get_cached() {
            Some(cached) => cached,
            None => self.resolver.resolve(None).await.config,
        };

        let module = config.remote_module(route_key).cloned();
        if module.is_none() {
            tracing::debug!(
                route_key,
                org_id = %config.org_id,
                "No remote module configured for route"
            );
        }
        module
    }
}

/// Strip a single leading `/`.
#[must_use]
pub fn route_key(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::infra::storage::InMemoryConfigStore;
    use org_config_sdk::{ConfigStoreClient, default_config};

    #[test]
    fn test_route_key_strips_one_slash() {
        assert_eq!(route_key("/remote"), "remote");
        assert_eq!(route_key("remote"), "remote");
        assert_eq!(route_key("//remote"), "/remote");
        assert_eq!(route_key(""), "");
    }

    #[tokio::test]
    async fn test_resolves_default_when_cache_empty() {
        let store = Arc::new(InMemoryConfigStore::new());
        let resolver = Arc::new(ConfigResolver::new(store, &ResolverConfig::default()));
        let router = RemoteModuleRouter::new(resolver.clone());

        let module = router.remote_module_for_path("/remote").await.unwrap();
        assert_eq!(module.module, "remote/App");
        assert!(resolver.get_cached().is_some());
        assert!(router.remote_module_for_path("/billing").await.is_none());
    }

    #[tokio::test]
    async fn test_uses_cached_org_config() {
        let store = Arc::new(InMemoryConfigStore::new());
        let mut acme = default_config();
        acme.id = "acme".to_owned();
        acme.org_id = "acme".to_owned();
        acme.remote_modules.clear();
        acme.remote_modules.insert(
            "billing".to_owned(),
            RemoteModuleConfig {
                path: "/billing".to_owned(),
                url: "https://cdn.acme.test/billing/remoteEntry.js".to_owned(),
                module: "billing/App".to_owned(),
            },
        );
        store
            .put("acme", &serde_json::to_value(&acme).unwrap())
            .await
            .unwrap();

        let resolver = Arc::new(ConfigResolver::new(store, &ResolverConfig::default()));
        resolver.resolve(Some("acme")).await;
        let router = RemoteModuleRouter::new(resolver);

        let module = router.remote_module_for_path("billing").await.unwrap();
        assert_eq!(module.url, "https://cdn.acme.test/billing/remoteEntry.js");
        assert!(router.remote_module_for_path("/remote").await.is_none());
    }
}
