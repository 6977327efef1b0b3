//! Core types for merge-plugin

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A GitHub account (user or bot)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Account login
    pub login: String,
}

impl User {
    /// Build a user from a login
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

/// A repository identity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repo {
    /// Owning user or organization
    pub owner: User,
    /// Repository name (without owner)
    pub name: String,
}

impl Repo {
    /// Build a repo from owner login and name
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: User::new(owner),
            name: name.into(),
        }
    }

    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// What happened to the comment that produced the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentAction {
    /// A new comment was posted
    Created,
    /// An existing comment was edited
    Edited,
    /// A comment was deleted
    Deleted,
}

impl std::fmt::Display for CommentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Edited => write!(f, "edited"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

/// A comment event normalized across issue comments, review comments and
/// review bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericCommentEvent {
    /// Comment action
    pub action: CommentAction,
    /// Whether the issue is a pull request
    #[serde(default)]
    pub is_pr: bool,
    /// Issue state as reported by GitHub ("open", "closed")
    pub issue_state: String,
    /// Comment body
    #[serde(default)]
    pub body: String,
    /// Web URL of the comment
    #[serde(default)]
    pub html_url: String,
    /// Issue / PR number
    pub number: u64,
    /// Commenter
    pub user: User,
    /// Author of the issue / PR
    pub issue_author: User,
    /// Repository the issue lives in
    pub repo: Repo,
}

impl GenericCommentEvent {
    /// Parse an event from its JSON form
    ///
    /// Rejects events that do not name a repository or an issue number.
    pub fn from_json(content: &str) -> Result<Self> {
        let event: Self = serde_json::from_str(content)?;

        if event.repo.owner.login.is_empty() || event.repo.name.is_empty() {
            return Err(Error::Event("event does not name a repository".to_string()));
        }
        if event.number == 0 {
            return Err(Error::Event(format!(
                "event for {} has no issue number",
                event.repo.full_name()
            )));
        }
        Ok(event)
    }

    /// Read and parse an event JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// A label attached to an issue or pull request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// Label name
    pub name: String,
    /// Hex color without the leading `#`
    #[serde(default)]
    pub color: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

impl Label {
    /// Build a label with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Whether `labels` contains `name`, compared case-insensitively like GitHub does
pub fn has_label(name: &str, labels: &[Label]) -> bool {
    labels.iter().any(|l| l.name.eq_ignore_ascii_case(name))
}

/// A pull request as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// PR title
    pub title: String,
    /// PR author
    pub user: User,
    /// State ("open" / "closed")
    pub state: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// Whether the PR has been merged
    pub merged: bool,
    /// Whether PR is a draft
    pub is_draft: bool,
}

/// A comment on an issue or pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueComment {
    /// Comment ID
    pub id: u64,
    /// Comment body text
    pub body: String,
    /// Comment author
    pub user: User,
    /// Web URL of the comment
    pub html_url: String,
    /// When the comment was created
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-invocation view of a comment event
///
/// Built fresh for every event and dropped when the handler returns.
#[derive(Debug, Clone)]
pub struct ReviewContext {
    /// Commenter login
    pub author: String,
    /// Issue / PR author login
    pub issue_author: String,
    /// Comment body
    pub body: String,
    /// Web URL of the comment
    pub html_url: String,
    /// Repository
    pub repo: Repo,
    /// Issue / PR number
    pub number: u64,
}

impl ReviewContext {
    /// Capture the fields the handler works with
    pub fn from_event(event: &GenericCommentEvent) -> Self {
        Self {
            author: event.user.login.clone(),
            issue_author: event.issue_author.login.clone(),
            body: event.body.clone(),
            html_url: event.html_url.clone(),
            repo: event.repo.clone(),
            number: event.number,
        }
    }

    /// Repository owner login
    pub fn org(&self) -> &str {
        &self.repo.owner.login
    }

    /// Whether the commenter opened the issue
    pub fn is_author(&self) -> bool {
        self.author == self.issue_author
    }
}
