use crate::batch::RenameOutcome;
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// Store key used when the caller does not name one.
pub const DEFAULT_STORE_ID: &str = "last";

/// One persisted batch: the outcomes plus an informational timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the batch was saved (RFC 3339). Not consulted by undo.
    pub created_at: String,
    pub outcomes: Vec<RenameOutcome>,
}

/// What an undo pass did, entry by entry.
///
/// Skipped entries are files that no longer exist at their `new_path`
/// (already reverted, or never successfully renamed); they are reported
/// but are not failures.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UndoReport {
    /// Successful reversals, as `(from, back_to)` pairs.
    pub reverted: Vec<(PathBuf, PathBuf)>,
    /// Entries whose `new_path` was missing.
    pub skipped: Vec<PathBuf>,
    /// Reversals that were attempted and failed, with the OS error text.
    pub failed: Vec<(PathBuf, String)>,
}

/// Persistent record of the most recent rename batch per store key.
///
/// Journals live as pretty-printed JSON files under `<working_dir>/.rebatch/`,
/// one file per store key. A new save overwrites the previous batch for the
/// same key; there is no history stack.
pub struct Journal {
    dir: PathBuf,
}

impl Journal {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            dir: working_dir.join(".rebatch"),
        }
    }

    pub fn store_path(&self, store_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", store_id))
    }

    /// Serialize `outcomes` to the store at `store_id`, replacing any prior
    /// batch saved under that key. Returns the path written.
    pub fn save(&self, outcomes: &[RenameOutcome], store_id: &str) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::Store {
            path: self.dir.clone(),
            source,
        })?;

        let entry = JournalEntry {
            created_at: chrono::Local::now().to_rfc3339(),
            outcomes: outcomes.to_vec(),
        };

        let path = self.store_path(store_id);
        let file = File::create(&path).map_err(|source| Error::Store {
            path: path.clone(),
            source,
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &entry).map_err(|e| Error::Store {
            path: path.clone(),
            source: std::io::Error::new(ErrorKind::Other, e),
        })?;

        Ok(path)
    }

    /// Replay the stored batch in reverse: every outcome whose `new_path`
    /// still exists is renamed back to its `old_path`.
    ///
    /// Individual reversal failures are collected in the report and do not
    /// stop the pass; the store file is deleted once the pass completes.
    /// A missing store (`StoreNotFound`) or an unparseable one
    /// (`Deserialization`) aborts before any reversal, leaving the store
    /// untouched.
    pub fn undo(&self, store_id: &str) -> Result<UndoReport, Error> {
        let path = self.store_path(store_id);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::StoreNotFound(path));
            },
            Err(source) => return Err(Error::Store { path, source }),
        };

        let entry: JournalEntry =
            serde_json::from_str(&data).map_err(|e| Error::Deserialization {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let mut report = UndoReport::default();
        for outcome in &entry.outcomes {
            if !outcome.new_path.exists() {
                report.skipped.push(outcome.old_path.clone());
                continue;
            }
            match fs::rename(&outcome.new_path, &outcome.old_path) {
                Ok(()) => report
                    .reverted
                    .push((outcome.new_path.clone(), outcome.old_path.clone())),
                Err(e) => report
                    .failed
                    .push((outcome.new_path.clone(), e.to_string())),
            }
        }

        fs::remove_file(&path).map_err(|source| Error::Store { path, source })?;

        Ok(report)
    }
}
