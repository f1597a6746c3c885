//! The fixed fallback configuration.

use std::collections::BTreeMap;

use crate::models::{
    BorderRadius, Branding, FeatureFlags, OrganizationConfig, RemoteModuleConfig, Spacing,
    ThemeColors, ThemeConfig, ThemeFonts,
};

/// Organization id used when no id is requested or configured.
pub const DEFAULT_ORG_ID: &str = "default";

const DEFAULT_REMOTE_URL: &str =
    "https://production-remote-addapar-remote-swalker326-ze.firstry.dev/remoteEntry.js";

/// Builds the default organization configuration.
///
/// Returned whenever resolution fails. Always fully populated.
#[must_use]
pub fn default_config() -> OrganizationConfig {
    let mut remote_modules = BTreeMap::new();
    remote_modules.insert(
        "remote".to_owned(),
        RemoteModuleConfig {
            path: "/remote".to_owned(),
            url: DEFAULT_REMOTE_URL.to_owned(),
            module: "remote/App".to_owned(),
        },
    );

    let features: FeatureFlags = [
        "enableAnalytics",
        "enableReporting",
        "enableAdvancedSearch",
    ]
    .into_iter()
    .map(|flag| (flag.to_owned(), true))
    .collect();

    OrganizationConfig {
        id: DEFAULT_ORG_ID.to_owned(),
        org_id: DEFAULT_ORG_ID.to_owned(),
        theme: ThemeConfig {
            colors: ThemeColors {
                primary: "#3B82F6".to_owned(),
                secondary: "#8B5CF6".to_owned(),
                accent: "#F59E0B".to_owned(),
                neutral: "#6B7280".to_owned(),
                background: "#FFFFFF".to_owned(),
                foreground: "#1F2937".to_owned(),
                error: "#EF4444".to_owned(),
                warning: "#F59E0B".to_owned(),
                success: "#10B981".to_owned(),
            },
            fonts: ThemeFonts {
                sans: "Inter, system-ui, sans-serif".to_owned(),
                serif: "Georgia, serif".to_owned(),
                mono: "JetBrains Mono, monospace".to_owned(),
            },
            border_radius: BorderRadius {
                sm: "0.125rem".to_owned(),
                md: "0.375rem".to_owned(),
                lg: "0.5rem".to_owned(),
                xl: "0.75rem".to_owned(),
            },
            spacing: Spacing {
                base: "1rem".to_owned(),
            },
        },
        remote_modules,
        features,
        branding: Branding {
            app_name: "Portal".to_owned(),
            logo: "/logo.svg".to_owned(),
            favicon: "/favicon.ico".to_owned(),
        },
    }
}
