//! GitHub token discovery

use super::AuthSource;
use crate::error::{Error, Result};
use crate::platform::GitHubClient;
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in order
const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Resolved GitHub credentials
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// API token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
    /// GitHub Enterprise host (`None` for github.com)
    pub host: Option<String>,
}

/// Find a GitHub token
///
/// Checks `GITHUB_TOKEN`, then `GH_TOKEN`, then `gh auth token`. `GH_HOST`
/// selects an Enterprise host.
pub async fn get_github_auth() -> Result<GitHubAuthConfig> {
    let host = std::env::var("GH_HOST")
        .ok()
        .filter(|h| !h.is_empty() && h != "github.com");

    for var in TOKEN_VARS {
        if let Ok(token) = std::env::var(var)
            && !token.trim().is_empty()
        {
            debug!(var, "using GitHub token from environment");
            return Ok(GitHubAuthConfig {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
                host,
            });
        }
    }

    let mut cmd = Command::new("gh");
    cmd.args(["auth", "token"]);
    if let Some(ref h) = host {
        cmd.args(["--hostname", h]);
    }

    let output = cmd.output().await.map_err(|e| {
        Error::Auth(format!(
            "no GITHUB_TOKEN or GH_TOKEN set and failed to run gh: {e}"
        ))
    })?;

    if !output.status.success() {
        return Err(Error::Auth(
            "no GITHUB_TOKEN or GH_TOKEN set and `gh auth token` failed. Run `gh auth login`."
                .to_string(),
        ));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(Error::Auth("`gh auth token` returned an empty token".to_string()));
    }

    debug!("using GitHub token from gh CLI");
    Ok(GitHubAuthConfig {
        token,
        source: AuthSource::Cli,
        host,
    })
}

/// Verify credentials by asking who we are
pub async fn test_github_auth(client: &dyn GitHubClient) -> Result<String> {
    client
        .bot_name()
        .await
        .map_err(|e| Error::Auth(format!("GitHub token rejected: {e}")))
}
