use crate::journal::{Journal, DEFAULT_STORE_ID};
use crate::output::UndoResult;
use anyhow::Result;
use std::path::Path;

/// High-level undo - equivalent to the `rebatch undo` command.
///
/// Replays the journal saved under `store_id` in reverse and deletes it.
pub fn undo_operation(working_dir: Option<&Path>, store_id: Option<&str>) -> Result<UndoResult> {
    let dir = working_dir.unwrap_or_else(|| Path::new("."));
    let journal = Journal::new(dir);
    let report = journal.undo(store_id.unwrap_or(DEFAULT_STORE_ID))?;

    Ok(UndoResult { report })
}
