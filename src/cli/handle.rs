//! Handle command - replay a comment event through the registered plugins

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::println;
use anyhow::{Context, Result, bail};
use merge_plugin::auth::get_github_auth;
use merge_plugin::platform::GitHubService;
use merge_plugin::types::GenericCommentEvent;
use std::path::PathBuf;
use tracing::info;

/// Options for the handle command
#[derive(Debug, Clone, Default)]
pub struct HandleOptions {
    /// Path to the event JSON
    pub event: PathBuf,
    /// Only dispatch to this plugin
    pub plugin: Option<String>,
    /// Override the GitHub API root
    pub api_url: Option<String>,
}

/// Run the handle command
pub async fn run_handle(ctx: &CommandContext, options: &HandleOptions) -> Result<()> {
    let event = GenericCommentEvent::from_file(&options.event)
        .with_context(|| format!("failed to read event {}", options.event.display()))?;

    let auth = get_github_auth().await?;
    let client = match options.api_url {
        Some(ref url) => GitHubService::with_base_uri(&auth.token, url),
        None => GitHubService::new(&auth.token, auth.host.as_deref()),
    }
    .context("failed to create GitHub client")?;

    info!(
        repo = %event.repo.full_name(),
        number = event.number,
        action = %event.action,
        "handling comment event"
    );

    if let Some(ref name) = options.plugin {
        ctx.registry
            .dispatch(name, &client, &ctx.config, &event)
            .await
            .with_context(|| format!("plugin '{name}' failed"))?;
    } else {
        let failures = ctx
            .registry
            .dispatch_all(&client, &ctx.config, &event)
            .await;
        if !failures.is_empty() {
            let details: Vec<String> = failures
                .iter()
                .map(|(name, e)| format!("{name}: {e}"))
                .collect();
            bail!("{} plugin(s) failed: {}", failures.len(), details.join("; "));
        }
    }

    println!(
        "{} Handled {}#{}",
        check(),
        event.repo.full_name().accent(),
        event.number
    );
    Ok(())
}
