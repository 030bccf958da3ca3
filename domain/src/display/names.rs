//! Friendly labels for known tools

/// A tool the display layer knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownTool {
    /// Text editor tool (`str_replace_editor`): create, edit, insert, view
    StrReplaceEditor,
    /// File manager tool (`file_manager`): rename, delete
    FileManager,
}

impl KnownTool {
    pub const ALL: [KnownTool; 2] = [KnownTool::StrReplaceEditor, KnownTool::FileManager];

    /// Exact, case-sensitive lookup of a tool identifier.
    pub fn parse(tool_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tool_name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnownTool::StrReplaceEditor => "str_replace_editor",
            KnownTool::FileManager => "file_manager",
        }
    }

    /// Generic label used when no file-specific text can be built.
    pub fn label(&self) -> &'static str {
        match self {
            KnownTool::StrReplaceEditor => "Editing code",
            KnownTool::FileManager => "Managing files",
        }
    }
}

impl std::fmt::Display for KnownTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve a tool identifier to its friendly label.
///
/// Unknown identifiers (including case variants and the empty string)
/// are returned unchanged.
pub fn tool_display_name(tool_name: &str) -> &str {
    KnownTool::parse(tool_name).map_or(tool_name, |t| t.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tools_resolve_to_labels() {
        assert_eq!(tool_display_name("str_replace_editor"), "Editing code");
        assert_eq!(tool_display_name("file_manager"), "Managing files");
    }

    #[test]
    fn test_unknown_tool_is_identity() {
        assert_eq!(tool_display_name("unknown_tool"), "unknown_tool");
        assert_eq!(tool_display_name("anything_else"), "anything_else");
    }

    #[test]
    fn test_empty_name_resolves_to_empty() {
        assert_eq!(tool_display_name(""), "");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(tool_display_name("STR_REPLACE_EDITOR"), "STR_REPLACE_EDITOR");
        assert_eq!(KnownTool::parse("File_Manager"), None);
    }

    #[test]
    fn test_parse_round_trips_identifier() {
        for tool in KnownTool::ALL {
            assert_eq!(KnownTool::parse(tool.as_str()), Some(tool));
            assert_eq!(tool.to_string(), tool.as_str());
        }
    }
}
