//! Error types for the Algolia search provider.

use plugin_shared::PluginError;
use thiserror::Error;

/// Errors that can occur while talking to the Algolia service.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Failed to construct the client or reach the service.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A search query failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// An object upsert failed.
    #[error("Save error: {0}")]
    SaveError(String),

    /// An object deletion failed.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Pushing index settings failed.
    #[error("Settings error: {0}")]
    SettingsError(String),

    /// Local serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl EngineError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a save error.
    pub fn save(msg: impl Into<String>) -> Self {
        Self::SaveError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a settings error.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::SettingsError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<EngineError> for PluginError {
    fn from(err: EngineError) -> Self {
        PluginError::engine(err.to_string())
    }
}
