//! [`ConfigStore`] adapters.

use super::loader::ConfigLoader;
use disclaimer_application::{ConfigSnapshot, ConfigStore, ConfigStoreError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::error;

/// Reads the `[settings]` table from the layered config files once per
/// snapshot, so edits take effect on the next request.
///
/// Only the namespace matching `[layout] app_id` has values; any other
/// namespace is empty. A config file that fails to parse is an error.
pub struct FileConfigStore {
    explicit_path: Option<PathBuf>,
}

impl FileConfigStore {
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self { explicit_path }
    }
}

impl ConfigStore for FileConfigStore {
    fn snapshot(&self, namespace: &str) -> Result<ConfigSnapshot, ConfigStoreError> {
        let config = ConfigLoader::load(self.explicit_path.as_deref()).map_err(|e| {
            error!("Could not load configuration: {}", e);
            ConfigStoreError(e.to_string())
        })?;

        if config.layout.app_id != namespace {
            return Ok(ConfigSnapshot::new());
        }
        Ok(config
            .settings
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect())
    }
}

/// Settings held in memory, keyed by namespace and key.
#[derive(Default)]
pub struct MemoryConfigStore {
    values: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, namespace: &str, key: &str, value: impl Into<String>) {
        if let Ok(mut values) = self.values.write() {
            values
                .entry(namespace.to_string())
                .or_default()
                .insert(key.to_string(), value.into());
        }
    }

    pub fn with(self, namespace: &str, key: &str, value: impl Into<String>) -> Self {
        self.set(namespace, key, value);
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn snapshot(&self, namespace: &str) -> Result<ConfigSnapshot, ConfigStoreError> {
        let values = self
            .values
            .read()
            .map_err(|_| ConfigStoreError("in-memory settings are poisoned".to_string()))?;
        Ok(values
            .get(namespace)
            .map(|stored| stored.clone().into_iter().collect())
            .unwrap_or_default())
    }
}
