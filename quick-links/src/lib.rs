//! # Quick Links
//!
//! Sidebar quick-links plugin: configuration plumbing only. The plugin
//! exposes a tag selector and a free-text link list to the host settings
//! UI and hands the current configuration back for rendering.

use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use plugin_shared::{
    ConfigField, ConfigFieldType, ConfigFieldUiOptions, ConfigPlugin, PluginError, PluginInfo,
    SidebarConfig, SidebarPlugin,
};

const SLUG_NAME: &str = "quick_links";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sidebar quick-links widget backed by host-managed configuration.
#[derive(Default)]
pub struct QuickLinks {
    config: RwLock<SidebarConfig>,
}

impl QuickLinks {
    /// Create the plugin with empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    fn config(&self) -> SidebarConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SidebarPlugin for QuickLinks {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            slug_name: SLUG_NAME.to_string(),
            name: "Quick Links".to_string(),
            description: "Displays a configurable link list in the sidebar".to_string(),
            author: "answer-plugins".to_string(),
            version: VERSION.to_string(),
            link: String::new(),
        }
    }

    fn sidebar_config(&self) -> Result<SidebarConfig, PluginError> {
        Ok(self.config())
    }
}

impl ConfigPlugin for QuickLinks {
    fn config_fields(&self) -> Vec<ConfigField> {
        let config = self.config();
        vec![
            ConfigField {
                name: "tags".to_string(),
                field_type: ConfigFieldType::TagSelector,
                title: "Tags".to_string(),
                description: "Show the widget on pages for these tags".to_string(),
                value: Value::Array(config.tags.into_iter().map(Value::String).collect()),
                ui_options: ConfigFieldUiOptions::default(),
            },
            ConfigField {
                name: "links_text".to_string(),
                field_type: ConfigFieldType::Textarea,
                title: "Links".to_string(),
                description: "One link per line".to_string(),
                value: Value::String(config.links_text),
                ui_options: ConfigFieldUiOptions {
                    rows: Some("5".to_string()),
                    class_name: Some("small font-monospace".to_string()),
                    ..Default::default()
                },
            },
        ]
    }

    fn config_receiver(&self, config: &[u8]) -> Result<(), PluginError> {
        let parsed: SidebarConfig =
            serde_json::from_slice(config).map_err(|e| PluginError::config(e.to_string()))?;
        *self
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner) = parsed;
        Ok(())
    }
}
