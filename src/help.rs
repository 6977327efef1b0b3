//! Plugin help descriptors
//!
//! Each plugin describes itself with a `PluginHelp` so the host can render
//! a combined help page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A chat command a plugin responds to
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Command {
    /// Usage string, e.g. `/merge [cancel]`
    pub usage: String,
    /// What the command does
    pub description: String,
    /// Whether the command is highlighted on the help page
    pub featured: bool,
    /// Who is allowed to use the command
    pub who_can_use: String,
    /// Example invocations
    pub examples: Vec<String>,
}

/// Self-description of a plugin
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginHelp {
    /// What the plugin does
    pub description: String,
    /// Per-repo configuration summary; empty for plugins that take no config
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, String>,
    /// Commands the plugin handles
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl PluginHelp {
    /// Create help with a description and no commands
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Append a command
    pub fn add_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Commands flagged as featured
    pub fn featured_commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().filter(|c| c.featured)
    }
}
