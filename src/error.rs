//! Error types for merge-plugin

use thiserror::Error;

/// Errors that can occur while handling comment events
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API returned an error or an unusable response
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error surfaced by the octocrab client
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Generic platform failure (used by non-GitHub clients and test doubles)
    #[error("platform error: {0}")]
    Platform(String),

    /// No usable GitHub credentials
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// A plugin with this name is already registered
    #[error("plugin '{0}' is already registered")]
    DuplicatePlugin(String),

    /// No plugin with this name is registered
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    /// Event payload could not be interpreted
    #[error("invalid event: {0}")]
    Event(String),

    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected internal state
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
