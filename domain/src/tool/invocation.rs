//! Tool invocation entity
//!
//! A [`ToolInvocation`] is one AI-issued tool call as seen by the chat view:
//! the tool name, its untyped argument bag, and whether it has finished.

use crate::core::error::DomainError;
use crate::display::{ToolDisplayFormatter, format_tool_display};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Untyped argument bag attached to a tool call.
///
/// Only string values are consumed by the display layer; everything else is
/// treated as absent.
pub type ToolArguments = HashMap<String, serde_json::Value>;

/// Lifecycle state of a tool invocation.
///
/// The chat stream reports `partial-call` / `call` while a tool is running and
/// `result` once it has returned; both spellings are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationState {
    /// Tool call issued, result not yet available
    #[default]
    #[serde(alias = "partial-call", alias = "call")]
    Pending,
    /// Tool call returned a result
    #[serde(alias = "result")]
    Complete,
}

impl InvocationState {
    pub fn as_str(&self) -> &str {
        match self {
            InvocationState::Pending => "pending",
            InvocationState::Complete => "complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, InvocationState::Complete)
    }
}

impl std::fmt::Display for InvocationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvocationState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" | "partial-call" | "call" => Ok(InvocationState::Pending),
            "complete" | "result" => Ok(InvocationState::Complete),
            other => Err(DomainError::InvalidInvocationState(other.to_string())),
        }
    }
}

/// A single tool call rendered in the chat view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Identifier assigned by the AI backend (may be empty)
    #[serde(default, alias = "toolCallId")]
    pub tool_call_id: String,
    /// Name of the tool that was called
    #[serde(alias = "toolName")]
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub args: ToolArguments,
    /// Current lifecycle state
    #[serde(default)]
    pub state: InvocationState,
}

impl ToolInvocation {
    pub fn new(tool_call_id: impl Into<String>, tool_name: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            args: HashMap::new(),
            state: InvocationState::Pending,
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn with_state(mut self, state: InvocationState) -> Self {
        self.state = state;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Status text using the default filename budget.
    pub fn display_text(&self) -> String {
        format_tool_display(&self.tool_name, &self.args)
    }

    /// Status text using a caller-supplied formatter.
    pub fn display_text_with(&self, formatter: &ToolDisplayFormatter) -> String {
        formatter.format(&self.tool_name, &self.args)
    }
}
