//! Plugin registry
//!
//! The host builds a `PluginRegistry` once at startup, registers every
//! plugin into it, then hands out shared references to the dispatcher.
//! Registration needs `&mut`, dispatch only `&`, so the table cannot change
//! once routing has begun.

use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::help::PluginHelp;
use crate::platform::GitHubClient;
use crate::types::GenericCommentEvent;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handler for generic comment events
#[async_trait]
pub trait GenericCommentHandler: Send + Sync {
    /// Handle one event
    ///
    /// Returning `Ok(())` covers both "acted" and "nothing to do".
    async fn handle_generic_comment(
        &self,
        client: &dyn GitHubClient,
        config: &Configuration,
        event: &GenericCommentEvent,
    ) -> Result<()>;
}

/// Builds a plugin's help from the current config and the repos it is enabled for
pub type HelpProvider = fn(&Configuration, &[String]) -> PluginHelp;

/// A registered plugin
#[derive(Clone)]
pub struct Registration {
    /// Unique plugin name
    pub name: String,
    /// Event handler
    pub handler: Arc<dyn GenericCommentHandler>,
    /// Help provider
    pub help: HelpProvider,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Name-keyed table of plugins
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<String, Registration>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generic comment handler under `name`
    ///
    /// Fails with [`Error::DuplicatePlugin`] if the name is taken.
    pub fn register_generic_comment_handler(
        &mut self,
        name: &str,
        handler: Arc<dyn GenericCommentHandler>,
        help: HelpProvider,
    ) -> Result<()> {
        if self.plugins.contains_key(name) {
            return Err(Error::DuplicatePlugin(name.to_string()));
        }

        debug!(plugin = name, "registered generic comment handler");
        self.plugins.insert(
            name.to_string(),
            Registration {
                name: name.to_string(),
                handler,
                help,
            },
        );
        Ok(())
    }

    /// Look up a plugin
    pub fn get(&self, name: &str) -> Option<&Registration> {
        self.plugins.get(name)
    }

    /// Registered plugin names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.plugins.keys().map(String::as_str).collect()
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Help for a single plugin
    pub fn help(
        &self,
        name: &str,
        config: &Configuration,
        enabled_repos: &[String],
    ) -> Result<PluginHelp> {
        let registration = self
            .get(name)
            .ok_or_else(|| Error::UnknownPlugin(name.to_string()))?;
        Ok((registration.help)(config, enabled_repos))
    }

    /// Route an event to one plugin
    pub async fn dispatch(
        &self,
        name: &str,
        client: &dyn GitHubClient,
        config: &Configuration,
        event: &GenericCommentEvent,
    ) -> Result<()> {
        let registration = self
            .get(name)
            .ok_or_else(|| Error::UnknownPlugin(name.to_string()))?;

        debug!(plugin = name, number = event.number, "dispatching generic comment");
        registration
            .handler
            .handle_generic_comment(client, config, event)
            .await
    }

    /// Route an event to every plugin
    ///
    /// A failing plugin does not stop the others. Returns the failures by
    /// plugin name.
    pub async fn dispatch_all(
        &self,
        client: &dyn GitHubClient,
        config: &Configuration,
        event: &GenericCommentEvent,
    ) -> Vec<(String, Error)> {
        let mut failures = Vec::new();

        for (name, registration) in &self.plugins {
            debug!(plugin = %name, number = event.number, "dispatching generic comment");
            if let Err(e) = registration
                .handler
                .handle_generic_comment(client, config, event)
                .await
            {
                warn!(plugin = %name, error = %e, "plugin failed to handle event");
                failures.push((name.clone(), e));
            }
        }

        failures
    }
}
