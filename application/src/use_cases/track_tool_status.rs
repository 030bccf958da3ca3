//! Track Tool Status use case.
//!
//! Consumes a stream of [`ToolInvocation`] records and maintains one status
//! line per tool call, reporting additions and changes to a
//! [`StatusNotifier`].
//!
//! A tool call is usually seen several times: once while pending (possibly
//! with partial arguments) and again when its result arrives. Records are
//! keyed by `tool_call_id`; first-seen order is preserved.

use crate::ports::invocation_source::{InvocationSource, SourceError};
use crate::ports::status_notifier::{StatusChange, StatusNotifier, ToolStatus};
use std::collections::HashMap;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uigen_domain::{InvocationState, ToolDisplayFormatter, ToolInvocation};

/// Errors that can occur while tracking tool status.
#[derive(Error, Debug)]
pub enum TrackToolStatusError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl TrackToolStatusError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TrackToolStatusError::Cancelled)
    }
}

/// Result of a completed tracking run.
#[derive(Debug, Clone, Default)]
pub struct TrackToolStatusOutput {
    /// Final status per tool call, in first-seen order
    pub statuses: Vec<ToolStatus>,
    /// Number of records consumed from the source
    pub records_read: usize,
}

impl TrackToolStatusOutput {
    pub fn pending_count(&self) -> usize {
        self.statuses.iter().filter(|s| !s.is_complete()).count()
    }

    pub fn complete_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.is_complete()).count()
    }
}

/// Ordered set of tool statuses keyed by tool call id.
#[derive(Debug, Default)]
pub struct StatusBoard {
    statuses: Vec<ToolStatus>,
    index: HashMap<String, usize>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one invocation record.
    ///
    /// `ordinal` is the 1-based arrival index, used to name calls that came
    /// without an id. Returns the affected status when something visible
    /// changed. A completed call never goes back to pending.
    pub fn apply(
        &mut self,
        invocation: ToolInvocation,
        ordinal: usize,
        formatter: &ToolDisplayFormatter,
    ) -> Option<(&ToolStatus, StatusChange)> {
        let display = invocation.display_text_with(formatter);
        let id = match invocation.tool_call_id.trim() {
            "" => format!("call-{}", ordinal),
            id => id.to_string(),
        };

        if let Some(pos) = self.index.get(&id).copied() {
            let status = &mut self.statuses[pos];
            let state = if status.state.is_complete() {
                InvocationState::Complete
            } else {
                invocation.state
            };
            if status.display == display && status.state == state {
                return None;
            }
            status.tool_name = invocation.tool_name;
            status.display = display;
            status.state = state;
            return Some((&self.statuses[pos], StatusChange::Updated));
        }

        self.index.insert(id.clone(), self.statuses.len());
        self.statuses.push(ToolStatus {
            tool_call_id: id,
            tool_name: invocation.tool_name,
            display,
            state: invocation.state,
        });
        self.statuses.last().map(|s| (s, StatusChange::Added))
    }

    pub fn statuses(&self) -> &[ToolStatus] {
        &self.statuses
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn into_statuses(self) -> Vec<ToolStatus> {
        self.statuses
    }
}

/// Use case for turning an invocation stream into status lines.
pub struct TrackToolStatusUseCase {
    formatter: ToolDisplayFormatter,
    cancellation_token: Option<CancellationToken>,
}

impl TrackToolStatusUseCase {
    pub fn new(formatter: ToolDisplayFormatter) -> Self {
        Self {
            formatter,
            cancellation_token: None,
        }
    }

    /// Stop reading once the token is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn formatter(&self) -> &ToolDisplayFormatter {
        &self.formatter
    }

    /// Read the source to exhaustion, reporting every visible change.
    pub async fn execute(
        &self,
        source: &mut dyn InvocationSource,
        notifier: &dyn StatusNotifier,
    ) -> Result<TrackToolStatusOutput, TrackToolStatusError> {
        info!(
            "Tracking tool status (max filename length {})",
            self.formatter.max_filename_length()
        );

        let mut board = StatusBoard::new();
        let mut records_read = 0usize;

        loop {
            let next = if let Some(ref token) = self.cancellation_token {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        return Err(TrackToolStatusError::Cancelled);
                    }
                    next = source.next_invocation() => next,
                }
            } else {
                source.next_invocation().await
            };

            let Some(invocation) = next? else {
                break;
            };
            records_read += 1;

            debug!(
                "Record {}: {} ({})",
                records_read, invocation.tool_name, invocation.state
            );

            if let Some((status, change)) = board.apply(invocation, records_read, &self.formatter)
            {
                notifier.on_status(status, change);
            }
        }

        let output = TrackToolStatusOutput {
            statuses: board.into_statuses(),
            records_read,
        };
        notifier.on_finished(&output.statuses);

        info!(
            "Read {} records: {} tool calls ({} pending, {} complete)",
            output.records_read,
            output.statuses.len(),
            output.pending_count(),
            output.complete_count()
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::invocation_source::VecInvocationSource;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<(String, StatusChange)>>,
        finished: Mutex<Option<usize>>,
    }

    impl StatusNotifier for RecordingNotifier {
        fn on_status(&self, status: &ToolStatus, change: StatusChange) {
            self.events
                .lock()
                .unwrap()
                .push((status.display.clone(), change));
        }

        fn on_finished(&self, statuses: &[ToolStatus]) {
            *self.finished.lock().unwrap() = Some(statuses.len());
        }
    }

    fn create(id: &str, path: &str, state: InvocationState) -> ToolInvocation {
        ToolInvocation::new(id, "str_replace_editor")
            .with_arg("command", "create")
            .with_arg("path", path)
            .with_state(state)
    }

    // ==================== StatusBoard ====================

    #[test]
    fn test_board_adds_and_updates() {
        let formatter = ToolDisplayFormatter::default();
        let mut board = StatusBoard::new();

        let (status, change) = board
            .apply(
                ToolInvocation::new("a", "str_replace_editor"),
                1,
                &formatter,
            )
            .unwrap();
        assert_eq!(status.display, "Editing code");
        assert_eq!(change, StatusChange::Added);

        let (status, change) = board
            .apply(create("a", "/Card.jsx", InvocationState::Pending), 2, &formatter)
            .unwrap();
        assert_eq!(status.display, "Creating Card.jsx");
        assert_eq!(change, StatusChange::Updated);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_board_ignores_identical_record() {
        let formatter = ToolDisplayFormatter::default();
        let mut board = StatusBoard::new();
        assert!(board
            .apply(create("a", "/Card.jsx", InvocationState::Pending), 1, &formatter)
            .is_some());
        assert!(board
            .apply(create("a", "/Card.jsx", InvocationState::Pending), 2, &formatter)
            .is_none());
    }

    #[test]
    fn test_board_complete_does_not_regress() {
        let formatter = ToolDisplayFormatter::default();
        let mut board = StatusBoard::new();
        board.apply(create("a", "/Card.jsx", InvocationState::Complete), 1, &formatter);
        assert!(board
            .apply(create("a", "/Card.jsx", InvocationState::Pending), 2, &formatter)
            .is_none());
        assert_eq!(board.statuses()[0].state, InvocationState::Complete);
    }

    #[test]
    fn test_board_assigns_ids_to_anonymous_calls() {
        let formatter = ToolDisplayFormatter::default();
        let mut board = StatusBoard::new();
        board.apply(create("", "/A.jsx", InvocationState::Pending), 1, &formatter);
        board.apply(create("  ", "/B.jsx", InvocationState::Pending), 2, &formatter);
        let ids: Vec<_> = board.statuses().iter().map(|s| s.tool_call_id.as_str()).collect();
        assert_eq!(ids, vec!["call-1", "call-2"]);
    }

    // ==================== Use case ====================

    #[tokio::test]
    async fn test_execute_tracks_lifecycle() {
        let mut source = VecInvocationSource::new(vec![
            create("call_1", "/src/Card.jsx", InvocationState::Pending),
            ToolInvocation::new("call_2", "file_manager")
                .with_arg("command", "rename")
                .with_arg("path", "/Button.jsx")
                .with_arg("new_path", "/PrimaryButton.jsx"),
            create("call_1", "/src/Card.jsx", InvocationState::Complete),
            create("call_1", "/src/Card.jsx", InvocationState::Complete),
        ]);
        let notifier = RecordingNotifier::default();
        let use_case = TrackToolStatusUseCase::new(ToolDisplayFormatter::default());

        let output = use_case.execute(&mut source, &notifier).await.unwrap();

        assert_eq!(output.records_read, 4);
        assert_eq!(output.statuses.len(), 2);
        assert_eq!(output.complete_count(), 1);
        assert_eq!(output.pending_count(), 1);
        assert_eq!(
            output.statuses[1].display,
            "Renaming Button.jsx to PrimaryButton.jsx"
        );

        let events = notifier.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                ("Creating Card.jsx".to_string(), StatusChange::Added),
                (
                    "Renaming Button.jsx to PrimaryButton.jsx".to_string(),
                    StatusChange::Added
                ),
                ("Creating Card.jsx".to_string(), StatusChange::Updated),
            ]
        );
        assert_eq!(*notifier.finished.lock().unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_execute_uses_configured_budget() {
        let mut source = VecInvocationSource::new(vec![create(
            "call_1",
            "/MediumLengthFile.js",
            InvocationState::Complete,
        )]);
        let use_case = TrackToolStatusUseCase::new(ToolDisplayFormatter::new(10));
        let output = use_case
            .execute(&mut source, &crate::ports::status_notifier::NoStatusNotifier)
            .await
            .unwrap();
        assert_eq!(output.statuses[0].display, "Creating Medi....js");
    }

    #[tokio::test]
    async fn test_execute_empty_source() {
        let mut source = VecInvocationSource::new(Vec::new());
        let notifier = RecordingNotifier::default();
        let output = TrackToolStatusUseCase::new(ToolDisplayFormatter::default())
            .execute(&mut source, &notifier)
            .await
            .unwrap();
        assert!(output.statuses.is_empty());
        assert_eq!(output.records_read, 0);
        assert_eq!(*notifier.finished.lock().unwrap(), Some(0));
    }

    struct FailingSource;

    #[async_trait]
    impl InvocationSource for FailingSource {
        async fn next_invocation(&mut self) -> Result<Option<ToolInvocation>, SourceError> {
            Err(SourceError::Decode {
                line: 1,
                message: "expected value".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_execute_propagates_source_error() {
        let err = TrackToolStatusUseCase::new(ToolDisplayFormatter::default())
            .execute(&mut FailingSource, &crate::ports::status_notifier::NoStatusNotifier)
            .await
            .unwrap_err();
        assert!(matches!(err, TrackToolStatusError::Source(SourceError::Decode { .. })));
        assert!(!err.is_cancelled());
    }

    struct EndlessSource;

    #[async_trait]
    impl InvocationSource for EndlessSource {
        async fn next_invocation(&mut self) -> Result<Option<ToolInvocation>, SourceError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_execute_honours_cancellation() {
        let token = CancellationToken::new();
        token.cancel();
        let err = TrackToolStatusUseCase::new(ToolDisplayFormatter::default())
            .with_cancellation(token)
            .execute(&mut EndlessSource, &crate::ports::status_notifier::NoStatusNotifier)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }
}
