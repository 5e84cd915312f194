use anyhow::Context;
use clap::Parser;
use rebatch_core::Config;
use std::io::{self, IsTerminal};
use std::process;

mod apply;
mod cli;
mod plan;
mod undo;

use cli::{validate_pattern, validate_rule_input, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_default();

    let use_color = if cli.no_color {
        false
    } else {
        config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal())
    };
    let store_id = cli
        .store
        .clone()
        .unwrap_or_else(|| config.defaults.store_id.clone());
    let output = cli.output.into();

    let result = match cli.command {
        Commands::Plan {
            pattern,
            action,
            parameter,
        } => validate_pattern(&pattern)
            .and_then(|()| validate_rule_input(&action, parameter.as_deref()))
            .and_then(|parameter| plan::handle_plan(&pattern, &action, &parameter, output, use_color)),

        Commands::Apply {
            pattern,
            action,
            parameter,
        } => validate_pattern(&pattern)
            .and_then(|()| validate_rule_input(&action, parameter.as_deref()))
            .and_then(|parameter| {
                apply::handle_apply(
                    &pattern, &action, &parameter, &store_id, output, use_color, cli.yes,
                )
            }),

        Commands::Undo => undo::handle_undo(&store_id, output, use_color),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
