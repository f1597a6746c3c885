//! Org-Config SDK
//!
//! This crate provides the public contract of the `org-config` module:
//!
//! - [`OrganizationConfig`] and its sections - Tenant presentation and behavior models
//! - [`default_config`] - The fixed fallback configuration
//! - [`ConfigStoreClient`] - Key-value store boundary, keyed by organization id
//! - [`ThemeSink`] - Presentation variable store consumed by theme application
//! - [`ConfigStoreError`] - Store error types
//!
//! ## Usage
//!
//! ```ignore
//! use org_config_sdk::{ConfigStoreClient, OrganizationConfig};
//!
//! let raw = store.get("acme").await?;
//! if let Some(value) = raw {
//!     let cfg: OrganizationConfig = serde_json::from_value(value)?;
//! }
//! ```

pub mod api;
pub mod defaults;
pub mod error;
pub mod models;

pub use api::{ConfigStoreClient, ThemeSink};
pub use defaults::{DEFAULT_ORG_ID, default_config};
pub use error::ConfigStoreError;
pub use models::{
    BorderRadius, Branding, FeatureFlags, OrganizationConfig, RemoteModuleConfig, Spacing,
    ThemeColors, ThemeConfig, ThemeFonts,
};
