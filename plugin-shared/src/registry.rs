//! Host-owned plugin registry.
//!
//! Plugins are registered explicitly from the application entry point
//! rather than through load-time side effects, so the host controls when
//! registration happens and with which instances.

use std::sync::Arc;

use tracing::info;

use crate::config::ConfigPlugin;
use crate::search::{SearchPlugin, SidebarPlugin};

/// Registry the host fills at startup and consults per request.
#[derive(Default)]
pub struct PluginRegistry {
    search_plugins: Vec<Arc<dyn SearchPlugin>>,
    sidebar_plugins: Vec<Arc<dyn SidebarPlugin>>,
    config_plugins: Vec<Arc<dyn ConfigPlugin>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a search provider plugin.
    pub fn register_search(&mut self, plugin: Arc<dyn SearchPlugin>) {
        info!(plugin = %plugin.info().slug_name, "Registered search plugin");
        self.search_plugins.push(plugin);
    }

    /// Register a sidebar plugin.
    pub fn register_sidebar(&mut self, plugin: Arc<dyn SidebarPlugin>) {
        info!(plugin = %plugin.info().slug_name, "Registered sidebar plugin");
        self.sidebar_plugins.push(plugin);
    }

    /// Register a plugin's configuration surface.
    pub fn register_config(&mut self, plugin: Arc<dyn ConfigPlugin>) {
        self.config_plugins.push(plugin);
    }

    /// Registered search plugins, in registration order.
    pub fn search_plugins(&self) -> &[Arc<dyn SearchPlugin>] {
        &self.search_plugins
    }

    /// Registered sidebar plugins, in registration order.
    pub fn sidebar_plugins(&self) -> &[Arc<dyn SidebarPlugin>] {
        &self.sidebar_plugins
    }

    /// Registered config surfaces, in registration order.
    pub fn config_plugins(&self) -> &[Arc<dyn ConfigPlugin>] {
        &self.config_plugins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SidebarConfig;
    use crate::errors::PluginError;
    use crate::info::PluginInfo;

    struct DummySidebar;

    impl SidebarPlugin for DummySidebar {
        fn info(&self) -> PluginInfo {
            PluginInfo {
                slug_name: "dummy_sidebar".to_string(),
                ..Default::default()
            }
        }

        fn sidebar_config(&self) -> Result<SidebarConfig, PluginError> {
            Ok(SidebarConfig::default())
        }
    }

    #[test]
    fn test_register_and_list_sidebar_plugins() {
        let mut registry = PluginRegistry::new();
        assert!(registry.sidebar_plugins().is_empty());

        registry.register_sidebar(Arc::new(DummySidebar));

        assert_eq!(registry.sidebar_plugins().len(), 1);
        assert_eq!(
            registry.sidebar_plugins()[0].info().slug_name,
            "dummy_sidebar"
        );
    }
}
