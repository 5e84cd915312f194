use rebatch_core::{
    execute, find_files, plan, Action, Journal, Rule, DEFAULT_STORE_ID,
};
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

fn touch(path: &Path) {
    File::create(path).unwrap();
}

#[test]
fn test_full_batch_flow_with_undo() {
    let temp = TempDir::new().unwrap();
    for name in ["img1.jpg", "img2.jpg", "img3.jpg"] {
        touch(&temp.path().join(name));
    }

    let files = find_files(temp.path(), "*.jpg").unwrap();
    assert_eq!(files.len(), 3);

    let rule = Rule::new(Action::Prefix, "vacation_");

    // Preview first: nothing moves.
    let preview = plan(&files, &rule);
    assert_eq!(preview.len(), 3);
    assert!(temp.path().join("img1.jpg").exists());

    // Execute and journal.
    let outcomes = execute(&files, &rule);
    assert!(outcomes.iter().all(|o| o.success));
    assert!(temp.path().join("vacation_img2.jpg").exists());

    let journal = Journal::new(temp.path());
    let store = journal.save(&outcomes, DEFAULT_STORE_ID).unwrap();
    assert!(store.exists());

    // Undo restores the original names and consumes the store.
    let report = journal.undo(DEFAULT_STORE_ID).unwrap();
    assert_eq!(report.reverted.len(), 3);
    for name in ["img1.jpg", "img2.jpg", "img3.jpg"] {
        assert!(temp.path().join(name).exists());
    }
    assert!(!store.exists());
}

#[test]
fn test_partial_failure_batch_undo_restores_only_the_renamed_files() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("a.txt"));
    touch(&temp.path().join("b.txt"));
    touch(&temp.path().join("c.txt"));
    // Pre-existing target: renaming b.txt to x_b.txt collides with a
    // directory of that name, so the rename itself fails.
    fs::create_dir(temp.path().join("x_b.txt")).unwrap();

    let files = find_files(temp.path(), "?.txt").unwrap();
    assert_eq!(files.len(), 3);

    let outcomes = execute(&files, &Rule::new(Action::Prefix, "x_"));
    let succeeded: Vec<_> = outcomes.iter().filter(|o| o.success).collect();
    let failed: Vec<_> = outcomes.iter().filter(|o| !o.success).collect();
    assert_eq!(succeeded.len(), 2);
    assert_eq!(failed.len(), 1);
    assert!(failed[0].old_path.ends_with("b.txt"));
    // The failed file is untouched on disk.
    assert!(temp.path().join("b.txt").exists());

    let journal = Journal::new(temp.path());
    let store = journal.save(&outcomes, DEFAULT_STORE_ID).unwrap();

    let report = journal.undo(DEFAULT_STORE_ID).unwrap();
    assert_eq!(report.reverted.len(), 2);
    // The failed entry's new_path is occupied by the collision directory;
    // its reversal attempt fails and is reported without stopping the pass.
    assert_eq!(report.failed.len(), 1);
    for name in ["a.txt", "b.txt", "c.txt"] {
        assert!(temp.path().join(name).exists());
    }
    assert!(!store.exists());
}

#[test]
fn test_one_bad_file_does_not_abort_the_rest() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("old_report_old.txt"));
    touch(&temp.path().join("summary.txt"));

    let files = find_files(temp.path(), "*.txt").unwrap();
    let outcomes = execute(&files, &Rule::new(Action::Replace, "old|new"));

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.success));
    assert!(temp.path().join("new_report_new.txt").exists());
    // A stem without the search text renames to itself.
    assert!(temp.path().join("summary.txt").exists());
}

#[test]
fn test_matcher_to_executor_on_nested_tree() {
    let temp = TempDir::new().unwrap();
    let sub = temp.path().join("2024");
    fs::create_dir(&sub).unwrap();
    touch(&temp.path().join("top.png"));
    touch(&sub.join("nested.png"));
    touch(&sub.join("skip.gif"));

    let files = find_files(temp.path(), "*.png").unwrap();
    assert_eq!(files.len(), 2);

    let outcomes = execute(&files, &Rule::new(Action::Extension, "jpg"));
    assert!(outcomes.iter().all(|o| o.success));
    // Each file stays in its own directory.
    assert!(temp.path().join("top.jpg").exists());
    assert!(sub.join("nested.jpg").exists());
    assert!(sub.join("skip.gif").exists());
}
