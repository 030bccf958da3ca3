//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable status lines
    Text,
    /// One JSON object per line
    Json,
}

impl From<uigen_domain::OutputFormat> for OutputFormat {
    fn from(format: uigen_domain::OutputFormat) -> Self {
        match format {
            uigen_domain::OutputFormat::Text => OutputFormat::Text,
            uigen_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for uigen-status
#[derive(Parser, Debug)]
#[command(name = "uigen-status")]
#[command(author, version, about = "Render AI tool calls as short status lines")]
#[command(long_about = r#"
uigen-status reads AI tool invocations (one JSON object per line) and prints a
short, human-readable status line for each, e.g. "Creating Card.jsx" or
"Renaming Button.jsx to PrimaryButton.jsx".

Each record looks like:
  {"toolCallId": "call_1", "toolName": "str_replace_editor",
   "args": {"command": "create", "path": "/src/Card.jsx"}, "state": "result"}

Configuration files are loaded from (in priority order):
1. UIGEN_* environment variables
2. --config <path>     Explicit config file
3. ./uigen.toml        Project-level config
4. ~/.config/uigen/config.toml   Global config

Example:
  uigen-status tool-calls.jsonl
  tail -f chat.jsonl | uigen-status --max-filename-length 20
  uigen-status --final -o json < tool-calls.jsonl
"#)]
pub struct Cli {
    /// JSONL file with tool invocations (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Maximum characters of a file name in a status line
    #[arg(long, value_name = "N")]
    pub max_filename_length: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Only print the final status of each tool call
    #[arg(long = "final")]
    pub final_only: bool,

    /// Fail on the first line that is not a valid invocation record
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary footer
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
