use crate::errors::Error;
use crate::rule::Rule;
use crate::transform::apply_rule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// The recorded result of attempting one file's transformation or rename.
///
/// `new_path` is empty when the transformation itself failed. A sequence of
/// outcomes is the unit the journal persists, so every field (including the
/// error text) must survive serialization exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub success: bool,
    pub error: Option<String>,
}

impl RenameOutcome {
    fn ok(old_path: PathBuf, new_path: PathBuf) -> Self {
        Self {
            old_path,
            new_path,
            success: true,
            error: None,
        }
    }

    fn failed(old_path: PathBuf, new_path: PathBuf, error: &Error) -> Self {
        Self {
            old_path,
            new_path,
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Dry run: compute the outcome of every rename without touching the
/// filesystem. One outcome per input path, in input order.
pub fn plan(files: &[PathBuf], rule: &Rule) -> Vec<RenameOutcome> {
    files
        .iter()
        .map(|old| match apply_rule(old, rule) {
            Ok(new_path) => RenameOutcome::ok(old.clone(), new_path),
            Err(e) => RenameOutcome::failed(old.clone(), PathBuf::new(), &e),
        })
        .collect()
}

/// Perform the renames. Failures are isolated per file: a bad parameter or
/// a failed `fs::rename` produces a failed outcome and the batch moves on.
/// The files actually renamed on disk are exactly the `success: true`
/// subset. Not atomic; partial success is expected and reported.
pub fn execute(files: &[PathBuf], rule: &Rule) -> Vec<RenameOutcome> {
    files
        .iter()
        .map(|old| {
            let new_path = match apply_rule(old, rule) {
                Ok(p) => p,
                Err(e) => return RenameOutcome::failed(old.clone(), PathBuf::new(), &e),
            };
            match fs::rename(old, &new_path) {
                Ok(()) => RenameOutcome::ok(old.clone(), new_path),
                Err(source) => {
                    let e = Error::RenameIo {
                        path: old.clone(),
                        source,
                    };
                    RenameOutcome::failed(old.clone(), new_path, &e)
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Action;
    use std::fs::File;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_plan_emits_one_outcome_per_file_in_order() {
        let files = vec![
            PathBuf::from("a.txt"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.txt"),
        ];
        let outcomes = plan(&files, &Rule::new(Action::Prefix, "x_"));

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].old_path, Path::new("a.txt"));
        assert_eq!(outcomes[0].new_path, Path::new("x_a.txt"));
        assert_eq!(outcomes[2].old_path, Path::new("c.txt"));
        assert!(outcomes.iter().all(|o| o.success));
    }

    #[test]
    fn test_plan_does_not_touch_the_filesystem() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("keep.txt");
        touch(&file);

        plan(&[file.clone()], &Rule::new(Action::Prefix, "gone_"));
        assert!(file.exists());
        assert!(!temp.path().join("gone_keep.txt").exists());
    }

    #[test]
    fn test_plan_isolates_a_bad_parameter() {
        let files = vec![PathBuf::from("one.txt"), PathBuf::from("two.txt")];
        let outcomes = plan(&files, &Rule::new(Action::Replace, "onlyonepart"));

        assert_eq!(outcomes.len(), 2);
        for outcome in &outcomes {
            assert!(!outcome.success);
            assert_eq!(outcome.new_path, PathBuf::new());
            assert!(outcome.error.as_deref().unwrap().contains("replace"));
        }
    }

    #[test]
    fn test_execute_renames_on_disk() {
        let temp = TempDir::new().unwrap();
        let old = temp.path().join("img1.jpg");
        touch(&old);

        let outcomes = execute(&[old.clone()], &Rule::new(Action::Prefix, "vacation_"));

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].success);
        assert!(!old.exists());
        assert!(temp.path().join("vacation_img1.jpg").exists());
    }

    #[test]
    fn test_execute_reports_a_vanished_file_without_panicking() {
        let temp = TempDir::new().unwrap();
        let ghost = temp.path().join("vanished.txt");

        let outcomes = execute(&[ghost.clone()], &Rule::new(Action::Suffix, "_x"));

        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].success);
        // The new path was computed before the rename failed.
        assert!(outcomes[0].new_path.ends_with("vanished_x.txt"));
        assert!(outcomes[0].error.is_some());
    }

    #[test]
    fn test_execute_partial_failure_does_not_abort_the_batch() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.txt");
        let missing = temp.path().join("missing.txt");
        let also_good = temp.path().join("also_good.txt");
        touch(&good);
        touch(&also_good);

        let files = vec![good.clone(), missing, also_good.clone()];
        let outcomes = execute(&files, &Rule::new(Action::Uppercase, ""));

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].success);
        assert!(!outcomes[1].success);
        assert!(outcomes[2].success);
        assert!(temp.path().join("GOOD.txt").exists());
        assert!(temp.path().join("ALSO_GOOD.txt").exists());
    }

    #[test]
    fn test_outcome_serde_round_trips_error_text() {
        let outcome = RenameOutcome {
            old_path: PathBuf::from("a.txt"),
            new_path: PathBuf::new(),
            success: false,
            error: Some("invalid parameter for 'replace': expected exactly two parts".to_string()),
        };
        let json = serde_json::to_string_pretty(&outcome).unwrap();
        let back: RenameOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
