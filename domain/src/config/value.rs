//! Typed parsing of stored configuration strings.

use thiserror::Error;

/// Default language when none is configured.
pub const DEFAULT_LANG: &str = "en";

pub const BYTES_PER_MB: u64 = 1_048_576;

/// A stored value that cannot be interpreted for its key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid boolean for '{key}': '{value}' (expected 'true' or 'false')")]
    InvalidBoolean { key: String, value: String },

    #[error("invalid size for '{key}': '{value}' (expected a non-negative number of megabytes)")]
    InvalidSize { key: String, value: String },

    #[error("empty value for '{key}'")]
    Empty { key: String },
}

/// Parse `"true"` / `"false"` (trimmed, case-insensitive).
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBoolean {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Read cap for the text document.
///
/// Keeps the stored megabyte string as written, next to the byte count it
/// stands for. Fractional megabytes are allowed; the byte count is rounded
/// down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSizeLimit {
    megabytes: String,
    bytes: u64,
}

impl TextSizeLimit {
    /// Megabytes as stored, e.g. `"1.5"`.
    pub fn megabytes(&self) -> &str {
        &self.megabytes
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

impl Default for TextSizeLimit {
    fn default() -> Self {
        Self {
            megabytes: "1".to_string(),
            bytes: BYTES_PER_MB,
        }
    }
}

/// Parse a non-negative number of megabytes, whole or fractional.
pub fn parse_size_mb(key: &str, value: &str) -> Result<TextSizeLimit, ConfigError> {
    let invalid = || ConfigError::InvalidSize {
        key: key.to_string(),
        value: value.to_string(),
    };

    let megabytes = value.trim();
    let mb: f64 = megabytes.parse().map_err(|_| invalid())?;
    if !mb.is_finite() || mb.is_sign_negative() {
        return Err(invalid());
    }
    let bytes = mb * BYTES_PER_MB as f64;
    if bytes >= u64::MAX as f64 {
        return Err(invalid());
    }

    Ok(TextSizeLimit {
        megabytes: megabytes.to_string(),
        bytes: bytes as u64,
    })
}
