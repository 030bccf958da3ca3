//! Console output formatter for tool status lines
//!
//! Pending calls get a spinner glyph, completed calls a dot:
//!
//! ```text
//! ⠋ Creating Card.jsx
//! ● Renaming Button.jsx to PrimaryButton.jsx
//! ```

use crate::output::formatter::{StatusFormatter, tally};
use colored::Colorize;
use uigen_application::ToolStatus;

const PENDING_GLYPH: &str = "⠋";
const COMPLETE_GLYPH: &str = "●";

/// Formats statuses for terminal display
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn glyph(&self, status: &ToolStatus) -> String {
        match (status.is_complete(), self.color) {
            (true, true) => COMPLETE_GLYPH.green().to_string(),
            (true, false) => COMPLETE_GLYPH.to_string(),
            (false, true) => PENDING_GLYPH.blue().to_string(),
            (false, false) => PENDING_GLYPH.to_string(),
        }
    }
}

impl StatusFormatter for ConsoleFormatter {
    fn format_status(&self, status: &ToolStatus) -> String {
        format!("{} {}", self.glyph(status), status.display)
    }

    fn format_summary(&self, statuses: &[ToolStatus]) -> String {
        let (pending, complete) = tally(statuses);
        let noun = if statuses.len() == 1 { "tool call" } else { "tool calls" };
        let summary = format!(
            "{} {} ({} pending, {} complete)",
            statuses.len(),
            noun,
            pending,
            complete
        );
        if self.color {
            summary.dimmed().to_string()
        } else {
            summary
        }
    }
}
