//! Shared test helpers

#![allow(dead_code)]

mod mock_client;

pub use mock_client::{LabelCall, MockGitHubClient};

use merge_plugin::types::{CommentAction, GenericCommentEvent, Repo, User};

/// Default PR number used by fixtures
pub const PR_NUMBER: u64 = 42;

/// A new comment on open PR `org/repo#42`
pub fn comment_event(body: &str) -> GenericCommentEvent {
    GenericCommentEvent {
        action: CommentAction::Created,
        is_pr: true,
        issue_state: "open".to_string(),
        body: body.to_string(),
        html_url: format!("https://github.com/org/repo/pull/{PR_NUMBER}#issuecomment-1"),
        number: PR_NUMBER,
        user: User::new("reviewer"),
        issue_author: User::new("author"),
        repo: Repo::new("org", "repo"),
    }
}
