//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types.

mod layout;
mod settings;
mod user;

pub use layout::FileLayoutConfig;
pub use settings::{FileSettingValue, FileSettingsConfig};
pub use user::FileUserConfig;

use disclaimer_domain::config::{ConfigKeyInfo, SettingKey, known_keys, lookup_key};
use disclaimer_domain::{ConfigError, parse_size_mb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems detected in a loaded configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("unknown setting '{key}' is ignored")]
    UnknownSetting { key: String },

    #[error("'{value}' is not allowed for '{key}' (allowed: {allowed})")]
    NotAllowed {
        key: String,
        value: String,
        allowed: String,
    },

    #[error(transparent)]
    InvalidSetting(#[from] ConfigError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Document directories, naming and URLs
    pub layout: FileLayoutConfig,
    /// Stored disclaimer settings
    pub settings: FileSettingsConfig,
    /// Current user
    pub user: FileUserConfig,
}

impl FileConfig {
    /// Stored value for `key`, as the string a key/value store would return.
    pub fn setting(&self, key: &str) -> Option<String> {
        self.settings.get(key).map(|v| v.to_string())
    }

    /// Validate the stored settings, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        for (key, value) in &self.settings {
            let Some(info) = lookup_key(key) else {
                issues.push(ConfigValidationError::UnknownSetting { key: key.clone() });
                continue;
            };
            if let Err(e) = Self::check_value(info, &value.to_string()) {
                issues.push(e);
            }
        }

        issues
    }

    fn check_value(info: &ConfigKeyInfo, value: &str) -> Result<(), ConfigValidationError> {
        if !info.valid_values.is_empty() {
            let normalized = value.trim().to_ascii_lowercase();
            if info.valid_values.contains(&normalized.as_str()) {
                return Ok(());
            }
            return Err(ConfigValidationError::NotAllowed {
                key: info.key.to_string(),
                value: value.to_string(),
                allowed: info.valid_values.join(", "),
            });
        }
        if info.key == SettingKey::MaxTextSizeMb.name() {
            parse_size_mb(info.key, value)?;
        } else if value.trim().is_empty() {
            return Err(ConfigError::Empty {
                key: info.key.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// One line per known setting with its effective value and description.
    pub fn describe_settings(&self) -> Vec<String> {
        let mut lines = vec!["Settings:".to_string()];
        for info in known_keys() {
            let (value, origin) = match self.setting(info.key) {
                Some(value) => (value, "set"),
                None => (info.default.to_string(), "default"),
            };
            lines.push(format!(
                "  {} = {} ({}): {}",
                info.key, value, origin, info.description
            ));
        }
        lines
    }
}
