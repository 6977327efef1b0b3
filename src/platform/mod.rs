//! Repository API clients
//!
//! Handlers receive a client per call instead of reaching for a global one,
//! so tests can hand in a double and the host decides how requests are made.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{IssueComment, Label, PullRequest};
use async_trait::async_trait;

/// The GitHub operations plugins are allowed to use
///
/// Timeouts, retries and rate limiting are the implementor's concern; the
/// plugins call each method once and propagate whatever comes back.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Whether `login` is a collaborator on `owner/repo`
    async fn is_collaborator(&self, owner: &str, repo: &str, login: &str) -> Result<bool>;

    /// Add a label to an issue or PR
    async fn add_label(&self, owner: &str, repo: &str, number: u64, label: &str) -> Result<()>;

    /// Remove a label from an issue or PR
    async fn remove_label(&self, owner: &str, repo: &str, number: u64, label: &str)
    -> Result<()>;

    /// List the labels currently on an issue or PR
    async fn get_issue_labels(&self, org: &str, repo: &str, number: u64) -> Result<Vec<Label>>;

    /// Fetch a pull request
    async fn get_pull_request(&self, org: &str, repo: &str, number: u64) -> Result<PullRequest>;

    /// List comments on an issue or PR
    async fn list_issue_comments(
        &self,
        org: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<IssueComment>>;

    /// Delete an issue comment
    async fn delete_comment(&self, org: &str, repo: &str, id: u64) -> Result<()>;

    /// Login of the account the client acts as
    async fn bot_name(&self) -> Result<String>;
}
