//! Domain layer for uigen-status
//!
//! This crate contains the tool-invocation model and the pure formatting
//! logic that turns raw AI tool calls into short status strings.
//! It performs no I/O and holds no state.
//!
//! # Core Concepts
//!
//! - **Tool invocation**: one AI-issued tool call (name, argument bag, state)
//! - **Display string**: the status text shown for it, e.g. `"Creating Card.jsx"`

pub mod config;
pub mod core;
pub mod display;
pub mod tool;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::error::DomainError;
pub use display::{
    DEFAULT_MAX_FILENAME_LENGTH, EditorCommand, FileCommand, KnownTool, ToolDisplayFormatter,
    extract_file_name, format_tool_display, safe_get_path, tool_display_name, truncate_filename,
};
pub use tool::{InvocationState, ToolArguments, ToolInvocation};
