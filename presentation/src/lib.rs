//! Presentation layer for uigen-status
//!
//! This crate contains CLI definitions, status line formatters,
//! and the status reporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{console::ConsoleFormatter, formatter::StatusFormatter, json::JsonFormatter};
pub use progress::reporter::{ReportMode, StatusReporter};
