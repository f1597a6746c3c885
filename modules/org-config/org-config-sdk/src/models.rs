//! Public models for the org-config module.
//!
//! These structures are the stored JSON shape of a tenant configuration.
//! Field names follow the camelCase layout persisted in the key-value store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named boolean feature flags.
pub type FeatureFlags = BTreeMap<String, bool>;

/// Presentation and behavior configuration of one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationConfig {
    pub id: String,
    /// Key the configuration is resolved by. Expected to equal `id`; not enforced.
    pub org_id: String,
    pub theme: ThemeConfig,
    /// Route key (path without leading `/`) to remote module entry.
    pub remote_modules: BTreeMap<String, RemoteModuleConfig>,
    pub features: FeatureFlags,
    pub branding: Branding,
}

impl OrganizationConfig {
    /// Returns whether the named feature flag is present and enabled.
    #[must_use]
    pub fn is_feature_enabled(&self, flag: &str) -> bool {
        self.features.get(flag).copied().unwrap_or(false)
    }

    /// Looks up the remote module registered under `route_key`.
    #[must_use]
    pub fn remote_module(&self, route_key: &str) -> Option<&RemoteModuleConfig> {
        self.remote_modules.get(route_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub border_radius: BorderRadius,
    pub spacing: Spacing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub neutral: String,
    pub background: String,
    pub foreground: String,
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl ThemeColors {
    /// Token name / value pairs in declaration order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("neutral", &self.neutral),
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("error", &self.error),
            ("warning", &self.warning),
            ("success", &self.success),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub sans: String,
    pub serif: String,
    pub mono: String,
}

impl ThemeFonts {
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("sans", &self.sans),
            ("serif", &self.serif),
            ("mono", &self.mono),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl BorderRadius {
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("sm", &self.sm),
            ("md", &self.md),
            ("lg", &self.lg),
            ("xl", &self.xl),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub base: String,
}

/// Where to fetch a micro-frontend bundle and which export to invoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteModuleConfig {
    pub path: String,
    pub url: String,
    pub module: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub app_name: String,
    pub logo: String,
    pub favicon: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_config;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(default_config()).unwrap();

        assert_eq!(value["orgId"], "default");
        assert!(value.get("remoteModules").is_some());
        assert_eq!(value["theme"]["borderRadius"]["sm"], "0.125rem");
        assert_eq!(value["branding"]["appName"], "Portal");
    }

    #[test]
    fn rejects_config_missing_theme_leaf() {
        let mut value = serde_json::to_value(default_config()).unwrap();
        value["theme"]["colors"]
            .as_object_mut()
            .unwrap()
            .remove("primary");

        let parsed: Result<OrganizationConfig, _> = serde_json::from_value(value);
        assert!(parsed.is_err(), "partial theme must not parse");
    }

    #[test]
    fn tolerates_unknown_top_level_fields() {
        let mut value = serde_json::to_value(default_config()).unwrap();
        value["extra"] = json!({"anything": 1});

        let parsed: OrganizationConfig = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, default_config());
    }

    #[test]
    fn feature_lookup_defaults_to_disabled() {
        let cfg = default_config();
        assert!(cfg.is_feature_enabled("enableAnalytics"));
        assert!(!cfg.is_feature_enabled("enableTimeTravel"));
    }

    #[test]
    fn remote_module_lookup_by_route_key() {
        let cfg = default_config();
        let module = cfg.remote_module("remote").unwrap();
        assert_eq!(module.path, "/remote");
        assert_eq!(module.module, "remote/App");
        assert!(cfg.remote_module("missing").is_none());
    }
}
