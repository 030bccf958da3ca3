//! Application layer for uigen-status
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    invocation_source::{InvocationSource, SourceError, VecInvocationSource},
    status_notifier::{NoStatusNotifier, StatusChange, StatusNotifier, ToolStatus},
};
pub use use_cases::track_tool_status::{
    StatusBoard, TrackToolStatusError, TrackToolStatusOutput, TrackToolStatusUseCase,
};
