//! Output formatting for status lines

pub mod console;
pub mod formatter;
pub mod json;
