//! Plugin configuration received from the host settings UI.

use serde::{Deserialize, Serialize};

/// Algolia credentials and index selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoliaConfig {
    /// Algolia application ID.
    #[serde(default)]
    pub app_id: String,
    /// API key with search and write permissions.
    #[serde(default)]
    pub api_key: String,
    /// Base index name; replicas derive from it.
    #[serde(default)]
    pub index: String,
    /// Show the provider logo next to search results.
    #[serde(default)]
    pub show_logo: bool,
}
