//! Organization config resolution with a single-slot cache and default fallback.
//!
//! The resolver remembers the most recently resolved configuration. A request
//! for the org id already held in the slot is answered without I/O; any other
//! request fetches from the store and replaces the slot. Every failure path
//! yields the default configuration, which is cached as well.

use std::sync::Arc;
use std::time::Duration;

use org_config_sdk::{
    ConfigStoreClient, DEFAULT_ORG_ID, OrganizationConfig, ThemeSink, default_config,
};
use parking_lot::RwLock;

use super::error::FetchError;
use super::theme::apply_theme;
use crate::config::ResolverConfig;

/// Where a resolved configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Served from the cache slot, no store access.
    Cached,
    /// Fetched from the store and parsed.
    Fetched,
    /// The store failed; the default configuration was used.
    Fallback,
}

impl ResolutionSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::Fetched => "fetched",
            Self::Fallback => "fallback",
        }
    }
}

/// A resolved configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: Arc<OrganizationConfig>,
    pub source: ResolutionSource,
}

/// Resolves organization configs through a [`ConfigStoreClient`], remembering
/// the last result in a single cache slot.
pub struct ConfigResolver {
    store: Arc<dyn ConfigStoreClient>,
    default_org_id: String,
    fetch_timeout: Duration,
    slot: RwLock<Option<Arc<OrganizationConfig>>>,
    // Serializes check-fetch-write so concurrent resolutions do not interleave.
    resolve_lock: tokio::sync::Mutex<()>,
}

impl ConfigResolver {
    /// An empty `default_org_id` is replaced by [`DEFAULT_ORG_ID`].
    #[must_use]
    pub fn new(store: Arc<dyn ConfigStoreClient>, config: &ResolverConfig) -> Self {
        Self {
            store,
            default_org_id: if config.default_org_id.is_empty() {
                DEFAULT_ORG_ID.to_owned()
            } else {
                config.default_org_id.clone()
            },
            fetch_timeout: config.fetch_timeout,
            slot: RwLock::new(None),
            resolve_lock: tokio::sync::Mutex::new(()),
        }
    }

    #[must_use]
    pub fn default_org_id(&self) -> &str {
        &self.default_org_id
    }

    /// Resolve the configuration for `org_id`, or for the default org id when
    /// `None` or empty.
    ///
    /// Never fails: store errors, missing entries, malformed blobs and
    /// timeouts all produce the default configuration.
    #[tracing::instrument(skip(self), fields(resolved_org = tracing::field::Empty))]
    pub async fn resolve(&self, org_id: Option<&str>) -> Resolution {
        let target = org_id
            .filter(|id| !id.is_empty())
            .unwrap_or(self.default_org_id.as_str());
        tracing::Span::current().record("resolved_org", target);

        let _guard = self.resolve_lock.lock().await;

        if let Some(config) = self.cached_for(target) {
            tracing::debug!("Organization config served from cache");
            return Resolution {
                config,
                source: ResolutionSource::Cached,
            };
        }

        match self.fetch(target).await {
            Ok(fetched) => {
                let config = Arc::new(fetched);
                *self.slot.write() = Some(Arc::clone(&config));
                tracing::info!(org_id = %config.org_id, "Organization config loaded");
                Resolution {
                    config,
                    source: ResolutionSource::Fetched,
                }
            }
            Err(e) => {
                tracing::error!(
                    org_id = target,
                    error = %e,
                    "Failed to load organization config, using default"
                );
                let config = Arc::new(default_config());
                *self.slot.write() = Some(Arc::clone(&config));
                Resolution {
                    config,
                    source: ResolutionSource::Fallback,
                }
            }
        }
    }

    /// Resolve, then apply the theme when the configuration was freshly fetched.
    pub async fn resolve_and_apply(&self, org_id: Option<&str>, sink: &dyn ThemeSink) -> Resolution {
        let resolution = self.resolve(org_id).await;
        if resolution.source == ResolutionSource::Fetched {
            apply_theme(&resolution.config.theme, sink);
        }
        resolution
    }

    /// Current slot content, without I/O.
    #[must_use]
    pub fn get_cached(&self) -> Option<Arc<OrganizationConfig>> {
        self.slot.read().clone()
    }

    /// Empty the slot. The next resolution always fetches.
    pub fn clear_cache(&self) {
        *self.slot.write() = None;
        tracing::debug!("Organization config cache cleared");
    }

    fn cached_for(&self, target: &str) -> Option<Arc<OrganizationConfig>> {
        self.slot
            .read()
            .as_ref()
            .filter(|cfg| cfg.org_id == target)
            .cloned()
    }

    async fn fetch(&self, org_id: &str) -> Result<OrganizationConfig, FetchError> {
        let raw = tokio::time::timeout(self.fetch_timeout, self.store.get(org_id))
            .await
            .map_err(|_| FetchError::Timeout(self.fetch_timeout))??
            .ok_or_else(|| FetchError::NotFound(org_id.to_owned()))?;

        serde_json::from_value(raw).map_err(FetchError::Malformed)
    }
}
