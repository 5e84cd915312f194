use crate::errors::Error;
use globset::Glob;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect every file under `root` whose base name matches
/// `pattern`.
///
/// Matching is shell-style (`*`, `?`, `[...]`), case-sensitive, and applied
/// to the base name only, never the full path. Directories are descended
/// into but not yielded. Entries are visited in file-name order so the
/// result is reproducible for an unchanged tree.
pub fn find_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let metadata = fs::metadata(root).map_err(|e| Error::Traversal {
        root: root.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(Error::Traversal {
            root: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let matcher = Glob::new(pattern)
        .map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Traversal {
            root: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
