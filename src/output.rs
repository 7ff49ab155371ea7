//! Output formatting for human and JSON modes
//!
//! Human mode prints a progress line per file as the run goes, then a
//! summary block. JSON mode stays quiet until the end and prints the whole
//! [`RunSummary`] once.

use std::path::Path;

use colored::{ColoredString, Colorize};

use crate::cleaner::{OutcomeStatus, ReplacementOutcome, RunSummary};
use crate::paths;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the banner shown before any file is processed
pub fn render_start(root: &Path, mode: OutputMode) {
    if mode == OutputMode::Human {
        println!("🚀 Starting print statement removal from {}", root.display());
        println!("{}", rule());
    }
}

impl ReplacementOutcome {
    /// Status line for this file, glyph first
    #[must_use]
    pub fn progress_line(&self, dry_run: bool) -> ColoredString {
        let path = self.path.display();
        match self.status {
            OutcomeStatus::Excluded => format!("⏭️  Skipping {path} (logging utility)").yellow(),
            OutcomeStatus::Unchanged => format!("⏭️  {path}: No prints found").dimmed(),
            OutcomeStatus::Cleaned if dry_run => {
                format!("✅ {path}: Would remove ~{} print statements", self.removed).cyan()
            },
            OutcomeStatus::Cleaned => {
                format!("✅ {path}: Removed ~{} print statements", self.removed).green()
            },
            OutcomeStatus::Failed => format!(
                "❌ Error processing {path}: {}",
                self.error.as_deref().unwrap_or("unknown error")
            )
            .red(),
        }
    }

    /// Print the progress line (human mode only)
    pub fn render(&self, mode: OutputMode, dry_run: bool) {
        if mode == OutputMode::Human {
            println!("{}", self.progress_line(dry_run));
        }
    }
}

impl RunSummary {
    /// Lines of the closing summary block
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            rule(),
            format!("✅ Complete! Processed {} files", self.files_processed),
            format!("📊 Total print statements removed: ~{}", self.total_removed),
        ];

        if self.files_failed > 0 {
            lines.push(format!("❌ {} file(s) could not be processed:", self.files_failed));
            for failure in self.failures() {
                lines.push(format!("  {}", failure.path.display()));
            }
        }

        if self.dry_run {
            lines.push("Dry run: no files were written.".to_string());
        }

        lines.push(String::new());
        lines.push("Run this to verify:".to_string());
        lines.push(format!("  {}", paths::verify_command(&self.root)));
        lines
    }

    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for line in self.summary_lines() {
            println!("{line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
