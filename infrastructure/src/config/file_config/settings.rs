//! Stored disclaimer settings from TOML (`[settings]` section)
//!
//! Keys are the stored setting names (`agreedisclaimerTxtFile`, ...).
//! Values may be written as TOML strings, booleans or numbers; they are
//! handed to the application as strings, like any key/value store would.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single stored setting value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileSettingValue {
    Flag(bool),
    Number(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for FileSettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSettingValue::Flag(b) => write!(f, "{}", b),
            FileSettingValue::Number(n) => write!(f, "{}", n),
            FileSettingValue::Decimal(x) => write!(f, "{}", x),
            FileSettingValue::Text(s) => f.write_str(s),
        }
    }
}

pub type FileSettingsConfig = BTreeMap<String, FileSettingValue>;
