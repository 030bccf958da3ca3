//! Status notification port
//!
//! Receives status line changes while invocations are tracked.
//! Implementations live in the presentation layer (console, JSON, ...).

use uigen_domain::InvocationState;

/// Current display state of one tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub tool_call_id: String,
    pub tool_name: String,
    pub display: String,
    pub state: InvocationState,
}

impl ToolStatus {
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }
}

/// Why a status was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// First record seen for this tool call
    Added,
    /// Display text or state changed
    Updated,
}

/// Callback for status updates
pub trait StatusNotifier: Send + Sync {
    /// Called when a status is added or changes.
    fn on_status(&self, status: &ToolStatus, change: StatusChange);

    /// Called once with the final snapshot when the source is exhausted.
    fn on_finished(&self, _statuses: &[ToolStatus]) {}
}

/// No-op notifier for when only the final output matters
pub struct NoStatusNotifier;

impl StatusNotifier for NoStatusNotifier {
    fn on_status(&self, _status: &ToolStatus, _change: StatusChange) {}
}
