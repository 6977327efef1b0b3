//! The merge plugin
//!
//! Watches pull request comments for `/merge` and `/merge cancel` and keeps
//! the `ok-to-merge` label in line with the latest request. Other systems
//! read that label as a merge gate; this plugin only toggles it.
//!
//! Three steps per event:
//! 1. Filter - only new comments on open PRs (pure)
//! 2. Parse - turn the body into a `MergeCommand` (pure)
//! 3. Reconcile - read labels, plan, write at most once (effectful)

mod command;
mod execute;
mod filter;
mod help;
mod plan;

pub use command::{MergeCommand, parse_command};
pub use execute::reconcile_label;
pub use filter::{SkipReason, is_eligible, skip_reason};
pub use help::help_provider;
pub use plan::{LabelChange, plan_label_change};

use crate::config::Configuration;
use crate::error::Result;
use crate::platform::GitHubClient;
use crate::registry::{GenericCommentHandler, PluginRegistry};
use crate::types::{GenericCommentEvent, ReviewContext};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Name the plugin is registered under
pub const PLUGIN_NAME: &str = "merge";

/// Label used as the merge gate
pub const MERGE_LABEL: &str = "ok-to-merge";

/// Register the merge plugin
pub fn register(registry: &mut PluginRegistry) -> Result<()> {
    registry.register_generic_comment_handler(PLUGIN_NAME, Arc::new(MergePlugin), help_provider)
}

/// Generic comment handler for `/merge`
#[derive(Debug, Clone, Copy, Default)]
pub struct MergePlugin;

#[async_trait]
impl GenericCommentHandler for MergePlugin {
    async fn handle_generic_comment(
        &self,
        client: &dyn GitHubClient,
        config: &Configuration,
        event: &GenericCommentEvent,
    ) -> Result<()> {
        handle_generic_comment(client, config, event).await
    }
}

/// Handle one comment event
///
/// Ineligible events and bodies without a command return `Ok(())` without
/// touching the client.
pub async fn handle_generic_comment(
    client: &dyn GitHubClient,
    config: &Configuration,
    event: &GenericCommentEvent,
) -> Result<()> {
    if let Some(reason) = skip_reason(event) {
        debug!(number = event.number, %reason, "ignoring comment");
        return Ok(());
    }

    let rc = ReviewContext::from_event(event);
    let Some(want_merge) = parse_command(&rc.body).wants_merge() else {
        return Ok(());
    };

    handle(client, config, &rc, want_merge).await
}

/// Apply a parsed `/merge` request
pub async fn handle(
    client: &dyn GitHubClient,
    config: &Configuration,
    rc: &ReviewContext,
    want_merge: bool,
) -> Result<()> {
    let org = rc.org();
    let repo = rc.repo.name.as_str();

    // Commenter permissions are not checked here; the scope lookup is
    // reported for whoever enforces them.
    debug!(
        org,
        repo,
        number = rc.number,
        author = %rc.author,
        is_author = rc.is_author(),
        scoped = !config.merge_options_for_repo(org, repo).repos.is_empty(),
        skip_collaborators = config.skip_collaborators(org, repo),
        url = %rc.html_url,
        want_merge,
        "handling merge command"
    );

    reconcile_label(client, org, repo, rc.number, MERGE_LABEL, want_merge).await?;
    Ok(())
}
