#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

pub mod batch;
pub mod config;
pub mod errors;
pub mod journal;
pub mod matcher;
pub mod operations;
pub mod output;
pub mod rule;
pub mod transform;

pub use batch::{execute, plan, RenameOutcome};
pub use config::Config;
pub use errors::{Error, Result};
pub use journal::{Journal, JournalEntry, UndoReport, DEFAULT_STORE_ID};
pub use matcher::find_files;
pub use operations::{plan_operation, rename_operation, undo_operation};
pub use output::{OutputFormat, PlanResult, RenameResult, UndoResult};
pub use rule::{Action, Rule, REPLACE_DELIMITER};
pub use transform::apply_rule;
