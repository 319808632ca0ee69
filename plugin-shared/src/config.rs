//! Configuration field descriptors and the config plugin trait.
//!
//! The host renders a settings form from the descriptors a plugin returns
//! and hands the serialized form values back through the config receiver
//! whenever an administrator saves them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::PluginError;

/// Widget type the host uses to render a config field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigFieldType {
    Input,
    Textarea,
    TagSelector,
    Switch,
}

/// Optional rendering hints for a config field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFieldUiOptions {
    /// Row count for textarea fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<String>,
    /// Extra CSS class names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// HTML input type for input fields (e.g. "password").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}

/// A single configurable field exposed to the host settings UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigField {
    /// Field name, also the key in the serialized settings blob.
    pub name: String,
    /// Widget type.
    #[serde(rename = "type")]
    pub field_type: ConfigFieldType,
    /// Field title shown in the UI.
    pub title: String,
    /// Field description shown in the UI.
    pub description: String,
    /// Current value.
    pub value: Value,
    /// Rendering hints.
    #[serde(default)]
    pub ui_options: ConfigFieldUiOptions,
}

/// Sidebar widget configuration: a tag selector plus a free-text link list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Tags whose pages display the sidebar widget.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text link list rendered in the widget.
    #[serde(default)]
    pub links_text: String,
}

/// A plugin with administrator-editable configuration.
pub trait ConfigPlugin: Send + Sync {
    /// Describe the configurable fields with their current values.
    fn config_fields(&self) -> Vec<ConfigField>;

    /// Receive a serialized settings blob from the host.
    fn config_receiver(&self, config: &[u8]) -> Result<(), PluginError>;
}
