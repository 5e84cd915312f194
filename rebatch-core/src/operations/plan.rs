use crate::batch::plan;
use crate::matcher::find_files;
use crate::output::PlanResult;
use crate::rule::{Action, Rule};
use anyhow::Result;
use std::path::Path;

/// High-level dry run - equivalent to the `rebatch plan` command.
///
/// Matches files under `working_dir` and previews what `action` would do to
/// them, without touching the filesystem. The action arrives as a string
/// from the outside world and is validated here.
pub fn plan_operation(
    pattern: &str,
    action: &str,
    parameter: &str,
    working_dir: Option<&Path>,
) -> Result<PlanResult> {
    let dir = working_dir.unwrap_or_else(|| Path::new("."));
    let rule = Rule::new(action.parse::<Action>()?, parameter);
    let files = find_files(dir, pattern)?;
    let outcomes = plan(&files, &rule);

    Ok(PlanResult {
        directory: dir.to_path_buf(),
        pattern: pattern.to_string(),
        outcomes,
    })
}
