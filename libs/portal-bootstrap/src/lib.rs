//! Process bootstrap shared by portal binaries.
//!
//! - [`config`] - layered configuration loading (defaults, YAML, env, aliases)
//! - [`logging`] - `tracing` subscriber setup
//! - [`signals`] - graceful shutdown on Ctrl+C / SIGTERM
//! - [`humantime_serde`] - `"5s"`-style durations in config files

pub mod config;
pub mod humantime_serde;
pub mod logging;
pub mod signals;

pub use config::*;
pub use logging::*;
pub use signals::*;
