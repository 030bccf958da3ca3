//! Status reporting while invocations are tracked

use crate::output::formatter::StatusFormatter;
use std::io::Write;
use std::sync::Mutex;
use uigen_application::{StatusChange, StatusNotifier, ToolStatus};

/// When status lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// A line for every addition or change, as it happens
    Live,
    /// One line per tool call once the stream ends
    FinalOnly,
}

/// Writes status lines through a [`StatusFormatter`].
pub struct StatusReporter {
    formatter: Box<dyn StatusFormatter>,
    mode: ReportMode,
    show_summary: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl StatusReporter {
    /// Reporter writing to stdout.
    pub fn new(formatter: Box<dyn StatusFormatter>, mode: ReportMode) -> Self {
        Self::with_writer(formatter, mode, Box::new(std::io::stdout()))
    }

    pub fn with_writer(
        formatter: Box<dyn StatusFormatter>,
        mode: ReportMode,
        out: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            formatter,
            mode,
            show_summary: true,
            out: Mutex::new(out),
        }
    }

    pub fn with_summary(mut self, show: bool) -> Self {
        self.show_summary = show;
        self
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            // Write errors (closed pipe) are ignored.
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}

impl StatusNotifier for StatusReporter {
    fn on_status(&self, status: &ToolStatus, _change: StatusChange) {
        if self.mode == ReportMode::Live {
            self.write_line(&self.formatter.format_status(status));
        }
    }

    fn on_finished(&self, statuses: &[ToolStatus]) {
        if self.mode == ReportMode::FinalOnly {
            for status in statuses {
                self.write_line(&self.formatter.format_status(status));
            }
        }
        if self.show_summary {
            self.write_line(&self.formatter.format_summary(statuses));
        }
    }
}
