//! Tool domain module
//!
//! Tool calls arrive from the AI backend as a name plus an untyped argument
//! bag. This module models them as [`ToolInvocation`] values; turning them
//! into status text is the job of [`crate::display`].
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────────┐    ┌──────────────┐
//! │ ToolInvocation   │───▶│ ToolDisplayFormatter │───▶│ "Creating    │
//! │ name, args, state│    │ (crate::display)     │    │  Card.jsx"   │
//! └──────────────────┘    └──────────────────────┘    └──────────────┘
//! ```

pub mod invocation;

pub use invocation::{InvocationState, ToolArguments, ToolInvocation};
