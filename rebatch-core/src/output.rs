use crate::batch::RenameOutcome;
use crate::journal::UndoReport;
use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as Ansi;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// How results are rendered for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// A dry-run preview: what one batch would do.
#[derive(Debug, Serialize)]
pub struct PlanResult {
    pub directory: PathBuf,
    pub pattern: String,
    pub outcomes: Vec<RenameOutcome>,
}

impl PlanResult {
    pub fn render(&self, format: OutputFormat, use_color: bool) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Human => Ok(self.render_human(use_color)),
        }
    }

    fn render_human(&self, use_color: bool) -> String {
        if self.outcomes.is_empty() {
            return format!(
                "No files matched pattern '{}' under {}\n",
                self.pattern,
                self.directory.display()
            );
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if use_color {
            table.enforce_styling();
            table.set_header(vec![
                Cell::new("File").fg(Color::Cyan),
                Cell::new("New name").fg(Color::Cyan),
                Cell::new("Status").fg(Color::Cyan),
            ]);
        } else {
            table.set_header(vec!["File", "New name", "Status"]);
        }

        for outcome in &self.outcomes {
            let old = outcome.old_path.display().to_string();
            if outcome.success {
                let new = outcome.new_path.display().to_string();
                if use_color {
                    table.add_row(vec![
                        Cell::new(old),
                        Cell::new(new),
                        Cell::new("ok").fg(Color::Green),
                    ]);
                } else {
                    table.add_row(vec![old, new, "ok".to_string()]);
                }
            } else {
                let error = outcome.error.clone().unwrap_or_default();
                if use_color {
                    table.add_row(vec![
                        Cell::new(old),
                        Cell::new("-"),
                        Cell::new(error).fg(Color::Red),
                    ]);
                } else {
                    table.add_row(vec![old, "-".to_string(), error]);
                }
            }
        }

        let renameable = self.outcomes.iter().filter(|o| o.success).count();
        format!(
            "{}\n{} of {} files would be renamed\n",
            table,
            renameable,
            self.outcomes.len()
        )
    }
}

/// The result of an executed batch.
#[derive(Debug, Serialize)]
pub struct RenameResult {
    pub outcomes: Vec<RenameOutcome>,
    pub journal_path: PathBuf,
}

impl RenameResult {
    pub fn render(&self, format: OutputFormat, use_color: bool) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Human => Ok(self.render_human(use_color)),
        }
    }

    fn render_human(&self, use_color: bool) -> String {
        let mut out = String::new();

        for outcome in &self.outcomes {
            if outcome.success {
                let line = format!(
                    "{} -> {}",
                    outcome.old_path.display(),
                    outcome.new_path.display()
                );
                if use_color {
                    writeln!(out, "{}", Ansi::Green.paint(line)).unwrap();
                } else {
                    writeln!(out, "{}", line).unwrap();
                }
            } else {
                let line = format!(
                    "{}: {}",
                    outcome.old_path.display(),
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
                if use_color {
                    writeln!(out, "{}", Ansi::Red.paint(line)).unwrap();
                } else {
                    writeln!(out, "{}", line).unwrap();
                }
            }
        }

        let renamed = self.outcomes.iter().filter(|o| o.success).count();
        writeln!(out, "Renamed {} of {} files", renamed, self.outcomes.len()).unwrap();
        writeln!(out, "Undo log saved to {}", self.journal_path.display()).unwrap();

        out
    }
}

/// The result of replaying a journal in reverse.
#[derive(Debug, Serialize)]
pub struct UndoResult {
    pub report: UndoReport,
}

impl UndoResult {
    pub fn render(&self, format: OutputFormat, use_color: bool) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Human => Ok(self.render_human(use_color)),
        }
    }

    fn render_human(&self, use_color: bool) -> String {
        let mut out = String::new();

        for (from, back_to) in &self.report.reverted {
            writeln!(out, "Restored {} -> {}", from.display(), back_to.display()).unwrap();
        }
        for old_path in &self.report.skipped {
            writeln!(out, "Skipped {} (nothing to revert)", old_path.display()).unwrap();
        }
        for (path, error) in &self.report.failed {
            let line = format!("Failed to restore {}: {}", path.display(), error);
            if use_color {
                writeln!(out, "{}", Ansi::Red.paint(line)).unwrap();
            } else {
                writeln!(out, "{}", line).unwrap();
            }
        }

        writeln!(
            out,
            "Restored {} files ({} skipped, {} failed)",
            self.report.reverted.len(),
            self.report.skipped.len(),
            self.report.failed.len()
        )
        .unwrap();

        out
    }
}
