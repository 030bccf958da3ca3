//! Configuration file loading for uigen-status
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `UIGEN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./uigen.toml` or `./.uigen.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/uigen/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileDisplayConfig, FileOutputConfig, FileOutputFormat};
pub use loader::ConfigLoader;
