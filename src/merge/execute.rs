//! Label reconciliation - effectful operations
//!
//! Reads the current labels, asks `plan_label_change` what to do, and
//! performs at most one write through the client.

use crate::error::Result;
use crate::merge::plan::{LabelChange, plan_label_change};
use crate::platform::GitHubClient;
use crate::types::has_label;
use tracing::{debug, error, info};

/// Make the presence of `label` on `org/repo#number` match `want`
///
/// Labels are fetched fresh on every call. If the fetch fails the error is
/// logged and the label is treated as absent, so a transient read failure
/// can lead to a redundant add. Write failures are returned unchanged and
/// are not retried.
///
/// Returns the change that was applied, if any.
pub async fn reconcile_label(
    client: &dyn GitHubClient,
    org: &str,
    repo: &str,
    number: u64,
    label: &str,
    want: bool,
) -> Result<Option<LabelChange>> {
    let labels = match client.get_issue_labels(org, repo, number).await {
        Ok(labels) => labels,
        Err(e) => {
            error!(org, repo, number, error = %e, "Failed to get the labels on {org}/{repo}#{number}.");
            Vec::new()
        }
    };

    let has = has_label(label, &labels);
    let Some(change) = plan_label_change(label, has, want) else {
        debug!(org, repo, number, has, "label already in desired state");
        return Ok(None);
    };

    match &change {
        LabelChange::Remove(name) => {
            info!(org, repo, number, label = %name, "Removing merge label.");
            client.remove_label(org, repo, number, name).await?;
        }
        LabelChange::Add(name) => {
            info!(org, repo, number, label = %name, "Adding merge label.");
            client.add_label(org, repo, number, name).await?;
        }
    }

    Ok(Some(change))
}
