//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod display;
mod output;

pub use display::FileDisplayConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};
use uigen_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Smallest filename budget that still shows one character before `...`.
const MIN_USEFUL_FILENAME_LENGTH: usize = 4;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Status text settings
    pub display: FileDisplayConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let budget = self.display.max_filename_length;
        if budget == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::FilenameBudgetZero,
                message: "display.max_filename_length must be at least 1".to_string(),
            });
        } else if budget < MIN_USEFUL_FILENAME_LENGTH {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::FilenameBudgetTooSmall { value: budget },
                message: format!(
                    "display.max_filename_length = {} leaves no room for a file name; long names will render as '...'",
                    budget
                ),
            });
        }

        issues
    }
}
