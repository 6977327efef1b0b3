//! merge-plugin: `/merge` comment handling for pull requests
//!
//! A host dispatcher routes repository comment events to named plugins.
//! This crate provides the merge plugin, which reconciles the `ok-to-merge`
//! label with `/merge` and `/merge cancel` comments, plus the small
//! registration and client contract it needs from the host.

pub mod auth;
pub mod config;
pub mod error;
pub mod help;
pub mod merge;
pub mod platform;
pub mod registry;
pub mod types;

pub use config::Configuration;
pub use error::{Error, Result};
pub use registry::PluginRegistry;

/// Build a registry containing every plugin in this crate
pub fn default_registry() -> Result<PluginRegistry> {
    let mut registry = PluginRegistry::new();
    merge::register(&mut registry)?;
    Ok(registry)
}
