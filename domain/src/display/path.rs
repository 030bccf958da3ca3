//! Path helpers for tool arguments
//!
//! Paths coming from tool calls are treated as plain `/`-delimited strings.
//! No platform path semantics are applied.

use crate::tool::ToolArguments;

/// Label used when the path is the filesystem root.
pub const ROOT_LABEL: &str = "root";

/// Extract the leaf segment (file name) from a path-like string.
///
/// - Empty or whitespace-only input yields `""`.
/// - `"/"` yields [`ROOT_LABEL`].
/// - Otherwise the last non-empty `/`-separated segment is returned, so
///   leading/trailing slashes and alias prefixes such as `@/` are ignored.
pub fn extract_file_name(path: &str) -> &str {
    let normalized = path.trim();
    if normalized == "/" {
        return ROOT_LABEL;
    }

    normalized
        .split('/')
        .rfind(|segment| !segment.is_empty())
        .unwrap_or("")
}

/// Read a string argument, trimmed.
///
/// Returns `None` when the key is missing, the value is not a string, or the
/// string is blank after trimming.
pub fn safe_get_path<'a>(args: &'a ToolArguments, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
