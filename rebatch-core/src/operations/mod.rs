//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each rebatch command,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod plan;
pub mod rename;
pub mod undo;

pub use plan::plan_operation;
pub use rename::rename_operation;
pub use undo::undo_operation;
