//! JSON lines output formatter

use crate::output::formatter::{StatusFormatter, tally};
use uigen_application::ToolStatus;

/// Formats each status as a single-line JSON object
pub struct JsonFormatter;

impl StatusFormatter for JsonFormatter {
    fn format_status(&self, status: &ToolStatus) -> String {
        serde_json::json!({
            "tool_call_id": status.tool_call_id,
            "tool_name": status.tool_name,
            "display": status.display,
            "state": status.state.as_str(),
        })
        .to_string()
    }

    fn format_summary(&self, statuses: &[ToolStatus]) -> String {
        let (pending, complete) = tally(statuses);
        serde_json::json!({
            "total": statuses.len(),
            "pending": pending,
            "complete": complete,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigen_domain::InvocationState;

    #[test]
    fn test_status_json() {
        let status = ToolStatus {
            tool_call_id: "call_1".to_string(),
            tool_name: "file_manager".to_string(),
            display: "Renaming Button.jsx to PrimaryButton.jsx".to_string(),
            state: InvocationState::Complete,
        };
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_status(&status)).unwrap();
        assert_eq!(value["tool_call_id"], "call_1");
        assert_eq!(value["display"], "Renaming Button.jsx to PrimaryButton.jsx");
        assert_eq!(value["state"], "complete");
    }

    #[test]
    fn test_status_json_is_one_line_with_all_fields() {
        let status = ToolStatus {
            tool_call_id: "call-3".to_string(),
            tool_name: "str_replace_editor".to_string(),
            display: "Creating \"Card\".jsx".to_string(),
            state: InvocationState::Pending,
        };
        let line = JsonFormatter.format_status(&status);
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["tool_call_id"], "call-3");
        assert_eq!(value["tool_name"], "str_replace_editor");
        assert_eq!(value["display"], "Creating \"Card\".jsx");
        assert_eq!(value["state"], "pending");
    }

    #[test]
    fn test_summary_json() {
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_summary(&[])).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["pending"], 0);
    }
}
