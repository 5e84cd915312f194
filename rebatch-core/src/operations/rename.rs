use crate::batch::execute;
use crate::journal::{Journal, DEFAULT_STORE_ID};
use crate::matcher::find_files;
use crate::output::RenameResult;
use crate::rule::{Action, Rule};
use anyhow::{Context, Result};
use std::path::Path;

/// High-level batch rename - equivalent to the `rebatch apply` command.
///
/// Matches, renames, and saves the outcome journal under `store_id`. The
/// journal is written even when some or all renames failed, so a partial
/// batch stays undoable.
pub fn rename_operation(
    pattern: &str,
    action: &str,
    parameter: &str,
    working_dir: Option<&Path>,
    store_id: Option<&str>,
) -> Result<RenameResult> {
    let dir = working_dir.unwrap_or_else(|| Path::new("."));
    let rule = Rule::new(action.parse::<Action>()?, parameter);
    let files = find_files(dir, pattern)?;
    let outcomes = execute(&files, &rule);

    let journal = Journal::new(dir);
    let journal_path = journal
        .save(&outcomes, store_id.unwrap_or(DEFAULT_STORE_ID))
        .context("failed to save undo journal")?;

    Ok(RenameResult {
        outcomes,
        journal_path,
    })
}
