//! Status formatter trait

use uigen_application::ToolStatus;

/// Trait for turning tool statuses into output lines
pub trait StatusFormatter: Send + Sync {
    /// Format a single status line (no trailing newline)
    fn format_status(&self, status: &ToolStatus) -> String;

    /// Format the summary footer for a set of statuses
    fn format_summary(&self, statuses: &[ToolStatus]) -> String;
}

/// Count of (pending, complete) statuses.
pub(crate) fn tally(statuses: &[ToolStatus]) -> (usize, usize) {
    let complete = statuses.iter().filter(|s| s.is_complete()).count();
    (statuses.len() - complete, complete)
}
