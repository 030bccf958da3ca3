//! Tool call → status line formatting
//!
//! Turns a tool name plus its argument bag into text such as
//! `"Creating Card.jsx"` or `"Renaming Button.jsx to PrimaryButton.jsx"`.
//! Every input produces a string; missing or unexpected arguments fall back
//! to [`tool_display_name`].

use super::names::{KnownTool, tool_display_name};
use super::path::{extract_file_name, safe_get_path};
use super::truncate::{DEFAULT_MAX_FILENAME_LENGTH, truncate_filename};
use crate::tool::ToolArguments;

const ARG_COMMAND: &str = "command";
const ARG_PATH: &str = "path";
const ARG_NEW_PATH: &str = "new_path";

/// Commands understood for `str_replace_editor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Create,
    StrReplace,
    Insert,
    View,
}

impl EditorCommand {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "create" => Some(Self::Create),
            "str_replace" => Some(Self::StrReplace),
            "insert" => Some(Self::Insert),
            "view" => Some(Self::View),
            _ => None,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create => "Creating",
            Self::StrReplace | Self::Insert => "Editing",
            Self::View => "Viewing",
        }
    }
}

/// Commands understood for `file_manager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCommand {
    Rename,
    Delete,
}

impl FileCommand {
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "rename" => Some(Self::Rename),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Self::Rename => "Renaming",
            Self::Delete => "Deleting",
        }
    }
}

/// Formatter with a configurable filename budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDisplayFormatter {
    max_filename_length: usize,
}

impl Default for ToolDisplayFormatter {
    fn default() -> Self {
        Self {
            max_filename_length: DEFAULT_MAX_FILENAME_LENGTH,
        }
    }
}

impl ToolDisplayFormatter {
    pub fn new(max_filename_length: usize) -> Self {
        Self {
            max_filename_length,
        }
    }

    pub fn max_filename_length(&self) -> usize {
        self.max_filename_length
    }

    /// Build the status text for a tool call.
    pub fn format(&self, tool_name: &str, args: &ToolArguments) -> String {
        let described = match KnownTool::parse(tool_name) {
            Some(KnownTool::StrReplaceEditor) => self.describe_editor(args),
            Some(KnownTool::FileManager) => self.describe_file_manager(args),
            None => None,
        };
        described.unwrap_or_else(|| tool_display_name(tool_name).to_string())
    }

    fn describe_editor(&self, args: &ToolArguments) -> Option<String> {
        let file = self.display_file_name(args, ARG_PATH)?;
        let command = command_arg(args).and_then(EditorCommand::parse)?;
        Some(format!("{} {}", command.verb(), file))
    }

    fn describe_file_manager(&self, args: &ToolArguments) -> Option<String> {
        let file = self.display_file_name(args, ARG_PATH)?;
        let command = command_arg(args).and_then(FileCommand::parse)?;
        match (command, self.display_file_name(args, ARG_NEW_PATH)) {
            (FileCommand::Rename, Some(new_file)) => {
                Some(format!("{} {} to {}", command.verb(), file, new_file))
            }
            _ => Some(format!("{} {}", command.verb(), file)),
        }
    }

    fn display_file_name(&self, args: &ToolArguments, key: &str) -> Option<String> {
        safe_get_path(args, key)
            .map(|path| truncate_filename(extract_file_name(path), self.max_filename_length))
    }
}

/// The `command` argument, verbatim. Non-string values count as missing.
fn command_arg(args: &ToolArguments) -> Option<&str> {
    args.get(ARG_COMMAND).and_then(|v| v.as_str())
}

/// Format a tool call with the default filename budget.
pub fn format_tool_display(tool_name: &str, args: &ToolArguments) -> String {
    ToolDisplayFormatter::default().format(tool_name, args)
}
