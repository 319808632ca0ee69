//! # Plugin Shared
//!
//! Shared contract types between the Q&A platform's plugin host and the
//! plugins in this workspace. It defines plugin metadata, configuration
//! field descriptors, the search plugin and sidebar plugin traits, and the
//! registry plugins are installed into at application startup.

pub mod config;
pub mod errors;
pub mod info;
pub mod registry;
pub mod search;

pub use config::{ConfigField, ConfigFieldType, ConfigFieldUiOptions, ConfigPlugin, SidebarConfig};
pub use errors::PluginError;
pub use info::PluginInfo;
pub use registry::PluginRegistry;
pub use search::{
    AcceptedCond, SearchCondition, SearchContent, SearchDesc, SearchPlugin, SearchResponse,
    SearchResult, SearchSyncer, SidebarPlugin,
};
