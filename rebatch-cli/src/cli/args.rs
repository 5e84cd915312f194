use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Batch-rename files matching a glob, with dry-run preview and undo
#[derive(Parser, Debug)]
#[command(name = "rebatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Assume yes for all prompts
    #[arg(short = 'y', long = "yes", global = true, env = "REBATCH_YES")]
    pub yes: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,

    /// Journal store key (defaults to the configured key, then "last")
    #[arg(long, global = true, value_name = "ID")]
    pub store: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview what a rule would rename, without touching any file
    Plan {
        /// Glob matched against base names (*, ?, [...]), e.g. '*.png'
        pattern: String,

        /// Renaming action: prefix, suffix, replace, extension, lowercase or uppercase
        action: String,

        /// Action parameter. `replace` takes 'search|replacement', `extension`
        /// the new extension without its dot; the case-folding actions take none
        parameter: Option<String>,
    },

    /// Rename matching files and record an undo journal (with confirmation)
    Apply {
        /// Glob matched against base names (*, ?, [...]), e.g. '*.png'
        pattern: String,

        /// Renaming action: prefix, suffix, replace, extension, lowercase or uppercase
        action: String,

        /// Action parameter. `replace` takes 'search|replacement', `extension`
        /// the new extension without its dot; the case-folding actions take none
        parameter: Option<String>,
    },

    /// Revert the most recently applied batch and delete its journal
    Undo,
}
