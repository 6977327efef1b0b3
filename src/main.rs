//! merge-plugin CLI

mod cli;

use crate::cli::style::Stylize;
use crate::cli::{
    CommandContext, DescribeOptions, HandleOptions, run_describe, run_handle, run_plugins,
};
use anstream::eprintln;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Toggle the ok-to-merge label from /merge comments
#[derive(Parser)]
#[command(name = "merge-plugin", version, about)]
struct Cli {
    /// Path to the plugin configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print plugin help
    Describe {
        /// Only describe this plugin
        plugin: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List registered plugins
    Plugins,

    /// Run a comment event (JSON file) through the plugins
    Handle {
        /// Path to the event JSON
        #[arg(long)]
        event: PathBuf,

        /// Only run this plugin
        #[arg(long)]
        plugin: Option<String>,

        /// GitHub API root (defaults to github.com or GH_HOST)
        #[arg(long, env = "MERGE_PLUGIN_API_URL")]
        api_url: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = CommandContext::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Describe { plugin, json } => {
            run_describe(&ctx, &DescribeOptions { plugin, json })?;
        }
        Commands::Plugins => run_plugins(&ctx),
        Commands::Handle {
            event,
            plugin,
            api_url,
        } => {
            run_handle(
                &ctx,
                &HandleOptions {
                    event,
                    plugin,
                    api_url,
                },
            )
            .await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
