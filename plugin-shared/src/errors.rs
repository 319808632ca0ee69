//! Error type shared across the plugin-host boundary.

use thiserror::Error;

/// Errors surfaced to the plugin host.
///
/// External-service failures and local serialization failures are carried
/// verbatim as messages; the host performs no classification or retry.
#[derive(Debug, Clone, Error)]
pub enum PluginError {
    /// Invalid or unparseable plugin configuration.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// A call to the external search engine failed.
    #[error("Search engine error: {0}")]
    EngineError(String),

    /// Local serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The host-provided syncer failed.
    #[error("Sync error: {0}")]
    SyncError(String),
}

impl PluginError {
    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a search engine error.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::EngineError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a sync error.
    pub fn sync(msg: impl Into<String>) -> Self {
        Self::SyncError(msg.into())
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
