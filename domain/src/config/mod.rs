//! Configuration keys and typed value parsing
//!
//! The configuration store hands back strings. These helpers turn them
//! into real values at the boundary, so nothing downstream ever compares
//! against `"true"`.

mod config_key;
mod value;

pub use config_key::{APP_ID, ConfigKeyInfo, SettingKey, known_keys, lookup_key};
pub use value::{BYTES_PER_MB, ConfigError, DEFAULT_LANG, TextSizeLimit, parse_bool, parse_size_mb};
