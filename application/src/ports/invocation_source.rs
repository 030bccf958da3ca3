//! Invocation source port
//!
//! Defines where tool invocations come from (a JSONL file, stdin, a live
//! chat stream, ...). Adapters live in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;
use uigen_domain::ToolInvocation;

/// Errors that can occur while reading invocations
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error at line {line}: {message}")]
    Decode { line: usize, message: String },
}

/// A stream of tool invocations.
///
/// The same `tool_call_id` may appear several times as the call moves from
/// pending to complete.
#[async_trait]
pub trait InvocationSource: Send {
    /// Next invocation, or `None` at end of stream.
    async fn next_invocation(&mut self) -> Result<Option<ToolInvocation>, SourceError>;
}

/// In-memory source, mainly for tests and replaying captured sessions.
pub struct VecInvocationSource {
    items: std::collections::VecDeque<ToolInvocation>,
}

impl VecInvocationSource {
    pub fn new(items: impl IntoIterator<Item = ToolInvocation>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

#[async_trait]
impl InvocationSource for VecInvocationSource {
    async fn next_invocation(&mut self) -> Result<Option<ToolInvocation>, SourceError> {
        Ok(self.items.pop_front())
    }
}
