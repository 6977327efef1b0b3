//! Shared command context for CLI commands
//!
//! Loads the configuration and builds the plugin registry once, the way a
//! host process would at startup.

use merge_plugin::config::Configuration;
use merge_plugin::error::Result;
use merge_plugin::registry::PluginRegistry;
use std::path::Path;

/// Shared context for CLI commands
pub struct CommandContext {
    /// Loaded configuration
    pub config: Configuration,
    /// Registry with every built-in plugin
    pub registry: PluginRegistry,
}

impl CommandContext {
    /// Load config and register plugins
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Configuration::load_or_default(config_path)?;
        let registry = merge_plugin::default_registry()?;
        Ok(Self { config, registry })
    }
}
