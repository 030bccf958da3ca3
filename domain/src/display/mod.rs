//! Tool invocation display module
//!
//! Converts raw tool calls into short, human-readable status text for the
//! chat view.
//!
//! ```text
//! format_tool_display("str_replace_editor", {command: "create", path: "/src/Card.jsx"})
//!     │
//!     ├─ safe_get_path(args, "path")     → "/src/Card.jsx"
//!     ├─ extract_file_name(..)           → "Card.jsx"
//!     ├─ truncate_filename(.., 30)       → "Card.jsx"
//!     └─ EditorCommand::Create.verb()    → "Creating Card.jsx"
//! ```
//!
//! Anything the formatter cannot describe falls back to the tool's friendly
//! label ([`tool_display_name`]), which itself echoes unknown tool names.
//!
//! # Examples
//!
//! ```
//! use uigen_domain::display::format_tool_display;
//! use uigen_domain::ToolArguments;
//!
//! let mut args = ToolArguments::new();
//! args.insert("command".into(), "delete".into());
//! args.insert("path".into(), "/old-file.ts".into());
//! assert_eq!(format_tool_display("file_manager", &args), "Deleting old-file.ts");
//! ```

pub mod formatter;
pub mod names;
pub mod path;
pub mod truncate;

pub use formatter::{EditorCommand, FileCommand, ToolDisplayFormatter, format_tool_display};
pub use names::{KnownTool, tool_display_name};
pub use path::{extract_file_name, safe_get_path};
pub use truncate::{DEFAULT_MAX_FILENAME_LENGTH, truncate_filename};
