//! Org-Config module.
//!
//! Resolves per-organization portal configuration with a single-slot cache
//! and a fixed fallback, turns themes into presentation variables, maps
//! navigation paths to remote modules and exposes the configuration store
//! over a small REST API.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use config::{CorsConfig, ResolverConfig, StoreConfig, StoreKind};
pub use domain::resolver::{ConfigResolver, Resolution, ResolutionSource};
pub use domain::routing::RemoteModuleRouter;
pub use domain::service::{OrgConfigService, UploadOutcome};
pub use domain::theme::{CssVariables, apply_theme, theme_variables};
pub use infra::build_store;
pub use infra::http::HttpConfigStore;
pub use infra::storage::{FileConfigStore, InMemoryConfigStore};
