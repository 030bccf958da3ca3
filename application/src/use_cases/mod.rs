//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod track_tool_status;
