//! Describe command - print plugin help

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, arrow};
use anstream::println;
use anyhow::{Context, Result};
use merge_plugin::help::PluginHelp;
use std::collections::BTreeMap;

/// Options for the describe command
#[derive(Debug, Clone, Default)]
pub struct DescribeOptions {
    /// Only describe this plugin
    pub plugin: Option<String>,
    /// Emit JSON instead of text
    pub json: bool,
}

/// Run the describe command
pub fn run_describe(ctx: &CommandContext, options: &DescribeOptions) -> Result<()> {
    let names: Vec<String> = match options.plugin {
        Some(ref name) => vec![name.clone()],
        None => ctx.registry.names().into_iter().map(String::from).collect(),
    };

    let mut helps = BTreeMap::new();
    for name in names {
        let help = ctx
            .registry
            .help(&name, &ctx.config, &[])
            .with_context(|| format!("failed to describe plugin '{name}'"))?;
        helps.insert(name, help);
    }

    if options.json {
        let json = serde_json::to_string_pretty(&helps).context("failed to serialize help")?;
        println!("{json}");
        return Ok(());
    }

    for (name, help) in &helps {
        print_help(name, help);
    }
    Ok(())
}

fn print_help(name: &str, help: &PluginHelp) {
    println!("{}", name.emphasis());
    println!("  {}", help.description);

    for cmd in &help.commands {
        println!();
        let featured = if cmd.featured { " (featured)" } else { "" };
        println!("  {}{}", cmd.usage.accent(), featured.muted());
        println!("    {}", cmd.description);
        println!("    {} {}", "Who can use:".muted(), cmd.who_can_use);
        for example in &cmd.examples {
            println!("    {} {}", arrow(), example);
        }
    }
    println!();
}

/// Run the plugins command
pub fn run_plugins(ctx: &CommandContext) {
    for name in ctx.registry.names() {
        println!("{name}");
    }
}
