//! In-memory port implementations for use case tests.

use crate::ports::config_store::{ConfigSnapshot, ConfigStore, ConfigStoreError};
use crate::ports::document_source::DocumentSource;
use crate::ports::url_builder::UrlBuilder;
use disclaimer_domain::{APP_ID, SettingKey};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Settings for [`APP_ID`]; any other namespace is empty.
#[derive(Default)]
pub struct MemoryConfigStore {
    values: ConfigSnapshot,
    failure: Option<String>,
    snapshots: Arc<AtomicUsize>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read fails with `reason`.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn with(mut self, key: SettingKey, value: &str) -> Self {
        self.values = self.values.with(key.name(), value);
        self
    }

    /// Counts the snapshots taken from this store.
    pub fn snapshot_counter(&self) -> SnapshotCounter {
        SnapshotCounter(self.snapshots.clone())
    }
}

impl ConfigStore for MemoryConfigStore {
    fn snapshot(&self, namespace: &str) -> Result<ConfigSnapshot, ConfigStoreError> {
        self.snapshots.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.failure {
            return Err(ConfigStoreError(reason.clone()));
        }
        if namespace != APP_ID {
            return Ok(ConfigSnapshot::new());
        }
        Ok(self.values.clone())
    }
}

pub struct SnapshotCounter(Arc<AtomicUsize>);

impl SnapshotCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Documents keyed by path. Every existence check is recorded.
#[derive(Default)]
pub struct MemoryDocuments {
    files: HashMap<PathBuf, Vec<u8>>,
    unreadable: Vec<PathBuf>,
    checked: Mutex<Vec<PathBuf>>,
}

impl MemoryDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(PathBuf::from(path), content.into());
        self
    }

    /// A file that exists but fails to read.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.push(PathBuf::from(path));
        self
    }

    pub fn checked(&self) -> Vec<PathBuf> {
        self.checked.lock().unwrap().clone()
    }
}

impl DocumentSource for MemoryDocuments {
    fn exists(&self, path: &Path) -> bool {
        self.checked.lock().unwrap().push(path.to_path_buf());
        self.files.contains_key(path) || self.unreadable.iter().any(|p| p == path)
    }

    fn read_prefix(&self, path: &Path, max_bytes: u64) -> io::Result<Vec<u8>> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        let bytes = self
            .files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))?;
        let len = bytes.len().min(max_bytes as usize);
        Ok(bytes[..len].to_vec())
    }
}

pub struct PrefixUrlBuilder;

impl UrlBuilder for PrefixUrlBuilder {
    fn link_to(&self, namespace: &str, relative_path: &str) -> String {
        format!("/apps/{}/{}", namespace, relative_path)
    }
}
