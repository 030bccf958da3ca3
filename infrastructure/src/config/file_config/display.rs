//! Display configuration from TOML (`[display]` section)

use serde::{Deserialize, Serialize};
use uigen_domain::{DEFAULT_MAX_FILENAME_LENGTH, ToolDisplayFormatter};

/// Raw display configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Maximum characters of a file name shown in a status line
    pub max_filename_length: usize,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self {
            max_filename_length: DEFAULT_MAX_FILENAME_LENGTH,
        }
    }
}

impl FileDisplayConfig {
    pub fn to_formatter(&self) -> ToolDisplayFormatter {
        ToolDisplayFormatter::new(self.max_filename_length)
    }
}
