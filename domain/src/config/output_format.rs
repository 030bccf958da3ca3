//! Output format value object

use serde::{Deserialize, Serialize};

/// How status lines are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per status (default)
    #[default]
    Text,
    /// One JSON object per status
    Json,
}
