use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the rename engine.
///
/// `Traversal` and `Pattern` abort a batch before any outcome exists.
/// `UnknownAction` rejects rule construction. `InvalidParameter` and
/// `RenameIo` are captured per-file inside a `RenameOutcome` and never
/// abort a batch. `StoreNotFound` and `Deserialization` abort an undo
/// before any reversal is attempted.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to traverse '{root}': {reason}")]
    Traversal { root: PathBuf, reason: String },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("unknown action '{0}' (expected prefix, suffix, replace, extension, lowercase or uppercase)")]
    UnknownAction(String),

    #[error("invalid parameter for '{action}': {reason}")]
    InvalidParameter {
        action: &'static str,
        reason: String,
    },

    #[error("failed to rename '{path}': {source}")]
    RenameIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no saved batch at '{}'", .0.display())]
    StoreNotFound(PathBuf),

    #[error("journal at '{}' is corrupt: {reason}", .path.display())]
    Deserialization { path: PathBuf, reason: String },

    #[error("failed to access journal store '{}': {source}", .path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
