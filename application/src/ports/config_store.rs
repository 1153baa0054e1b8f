//! Key/value configuration store port.
//!
//! Values are stored as strings; typed parsing happens in
//! [`DisclaimerConfig`](crate::config::DisclaimerConfig).

use std::collections::HashMap;
use thiserror::Error;

/// The store itself could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("configuration store unavailable: {0}")]
pub struct ConfigStoreError(pub String);

/// Every value stored under one namespace, read in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    values: HashMap<String, String>,
}

impl ConfigSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Value stored under `key`, or `default` when absent.
    pub fn get_value(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

impl FromIterator<(String, String)> for ConfigSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Port for reading application settings.
///
/// The application takes one snapshot per call and reads every key from
/// it, so a call never mixes values from two versions of the store.
/// Nothing is cached across calls.
pub trait ConfigStore: Send + Sync {
    /// All values stored under `namespace`.
    ///
    /// A store that cannot be read is an error, never an empty snapshot.
    fn snapshot(&self, namespace: &str) -> Result<ConfigSnapshot, ConfigStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_uses_default() {
        let snapshot = ConfigSnapshot::new().with("agreedisclaimerDefaultLang", "de");
        assert_eq!(snapshot.get_value("agreedisclaimerDefaultLang", "en"), "de");
        assert_eq!(snapshot.get_value("agreedisclaimerTxtFile", "true"), "true");
    }

    #[test]
    fn test_collect_from_pairs() {
        let snapshot: ConfigSnapshot = [("k".to_string(), "v".to_string())].into_iter().collect();
        assert_eq!(snapshot, ConfigSnapshot::new().with("k", "v"));
    }
}
