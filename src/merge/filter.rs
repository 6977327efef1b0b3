//! Event eligibility

use crate::types::{CommentAction, GenericCommentEvent};

/// Why an event was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Comment is on a plain issue
    NotPullRequest,
    /// PR is closed or merged
    NotOpen,
    /// Comment was edited or deleted rather than created
    NotCreated,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPullRequest => write!(f, "not a pull request"),
            Self::NotOpen => write!(f, "pull request is not open"),
            Self::NotCreated => write!(f, "comment was not newly created"),
        }
    }
}

/// Check whether an event should be looked at
///
/// Only new comments on open pull requests qualify. Returns the first
/// reason the event fails, or `None` when it is eligible.
pub fn skip_reason(event: &GenericCommentEvent) -> Option<SkipReason> {
    if !event.is_pr {
        Some(SkipReason::NotPullRequest)
    } else if event.issue_state != "open" {
        Some(SkipReason::NotOpen)
    } else if event.action != CommentAction::Created {
        Some(SkipReason::NotCreated)
    } else {
        None
    }
}

/// Whether an event should be looked at
pub fn is_eligible(event: &GenericCommentEvent) -> bool {
    skip_reason(event).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Repo, User};

    fn event() -> GenericCommentEvent {
        GenericCommentEvent {
            action: CommentAction::Created,
            is_pr: true,
            issue_state: "open".to_string(),
            body: "/merge".to_string(),
            html_url: String::new(),
            number: 1,
            user: User::new("alice"),
            issue_author: User::new("bob"),
            repo: Repo::new("org", "repo"),
        }
    }

    #[test]
    fn test_new_comment_on_open_pr_is_eligible() {
        assert!(is_eligible(&event()));
    }

    #[test]
    fn test_issue_is_skipped() {
        let e = GenericCommentEvent {
            is_pr: false,
            ..event()
        };
        assert_eq!(skip_reason(&e), Some(SkipReason::NotPullRequest));
    }

    #[test]
    fn test_closed_pr_is_skipped() {
        let e = GenericCommentEvent {
            issue_state: "closed".to_string(),
            ..event()
        };
        assert_eq!(skip_reason(&e), Some(SkipReason::NotOpen));
    }

    #[test]
    fn test_edited_and_deleted_are_skipped() {
        for action in [CommentAction::Edited, CommentAction::Deleted] {
            let e = GenericCommentEvent { action, ..event() };
            assert_eq!(skip_reason(&e), Some(SkipReason::NotCreated));
        }
    }
}
