//! Configuration file loading for agree-disclaimer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DISCLAIMER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./disclaimer.toml` or `./.disclaimer.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/agree-disclaimer/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod store;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLayoutConfig, FileSettingValue, FileSettingsConfig,
    FileUserConfig,
};
pub use loader::ConfigLoader;
pub use store::{FileConfigStore, MemoryConfigStore};
