mod args;
mod types;
mod validate;

pub use args::{Cli, Commands};
pub use types::OutputFormat;
pub use validate::{validate_pattern, validate_rule_input};
