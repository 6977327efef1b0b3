//! Plugin configuration
//!
//! Loaded once at startup from TOML and shared read-only by every handler.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user config dir
const CONFIG_DIR: &str = "merge-plugin";

/// Default config filename
const CONFIG_FILE: &str = "config.toml";

/// Returned when no merge entry applies to a repo
static DEFAULT_MERGE: MergeConfig = MergeConfig { repos: Vec::new() };

/// Settings for the merge plugin, scoped to a set of orgs or repos
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeConfig {
    /// Orgs (`org`) or repos (`org/repo`) this entry applies to
    #[serde(default)]
    pub repos: Vec<String>,
}

/// OWNERS-file related settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnersConfig {
    /// Orgs or repos where collaborator checks are replaced by OWNERS files
    #[serde(default)]
    pub skip_collaborators: Vec<String>,
}

/// Configuration shared by all plugins
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
    /// Ordered merge entries; the first one that matches a repo wins
    #[serde(default)]
    pub merge: Vec<MergeConfig>,
    /// OWNERS settings
    #[serde(default)]
    pub owners: OwnersConfig,
}

/// Whether `scopes` names either the bare org or `org/repo`
fn in_scope(scopes: &[String], org: &str, full_name: &str) -> bool {
    scopes.iter().any(|s| s == org || s == full_name)
}

impl Configuration {
    /// Find the merge entry that applies to `org/repo`
    ///
    /// Entries are checked in order and the first one listing either the org
    /// or the full repo name is returned. Repos no entry mentions get an empty
    /// default.
    pub fn merge_options_for_repo(&self, org: &str, repo: &str) -> &MergeConfig {
        let full_name = format!("{org}/{repo}");
        self.merge
            .iter()
            .find(|m| in_scope(&m.repos, org, &full_name))
            .unwrap_or(&DEFAULT_MERGE)
    }

    /// Whether collaborator checks should be skipped for `org/repo`
    pub fn skip_collaborators(&self, org: &str, repo: &str) -> bool {
        let full_name = format!("{org}/{repo}");
        in_scope(&self.owners.skip_collaborators, org, &full_name)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {e}")))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Load from `path` if given, otherwise from the default location
    ///
    /// A missing default file is not an error and yields an empty config.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            return Self::load(p);
        }

        match Self::default_path() {
            Some(p) if p.exists() => Self::load(&p),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/merge-plugin/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}
