//! Plugin metadata returned to the host for display.

use serde::{Deserialize, Serialize};

/// Descriptor the host renders in its plugin listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique machine-readable plugin identifier.
    pub slug_name: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Short description of what the plugin does.
    pub description: String,
    /// Plugin author.
    pub author: String,
    /// Plugin version.
    pub version: String,
    /// Homepage or repository link.
    pub link: String,
}
