//! Help text for the merge plugin

use crate::config::Configuration;
use crate::help::{Command, PluginHelp};
use crate::merge::MERGE_LABEL;

/// Describe the merge plugin
///
/// The plugin takes no configuration, so neither argument affects the result.
pub fn help_provider(_config: &Configuration, _enabled_repos: &[String]) -> PluginHelp {
    let mut help = PluginHelp::new(format!(
        "The merge plugin manages the application and removal of the '{MERGE_LABEL}' label which is typically used to gate merging."
    ));
    help.add_command(Command {
        usage: "/merge [cancel]".to_string(),
        description: format!(
            "Adds or removes the '{MERGE_LABEL}' label which is typically used to gate merging."
        ),
        featured: true,
        who_can_use: "Collaborators on the repository and the PR author.".to_string(),
        examples: vec!["/merge".to_string(), "/merge cancel".to_string()],
    });
    help
}
