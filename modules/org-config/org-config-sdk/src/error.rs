//! Error types for the configuration store boundary.

use thiserror::Error;

/// Errors that can occur when talking to a configuration store.
///
/// A missing key is not an error: stores return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// The store could not be reached or the transport failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with an unexpected status.
    #[error("unexpected store response status: {status}")]
    UnexpectedStatus {
        /// HTTP status code returned by the remote store.
        status: u16,
    },

    /// The stored or transmitted payload is not valid JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure in a file-backed store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be used by this store.
    #[error("invalid key: '{0}'")]
    InvalidKey(String),
}
