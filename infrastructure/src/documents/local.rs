//! Local file system [`DocumentSource`].

use disclaimer_application::DocumentSource;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// Reads disclaimer documents straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDocumentSource;

impl LocalDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for LocalDocumentSource {
    fn exists(&self, path: &Path) -> bool {
        let exists = path.exists();
        trace!("exists({}) = {}", path.display(), exists);
        exists
    }

    fn read_prefix(&self, path: &Path, max_bytes: u64) -> io::Result<Vec<u8>> {
        let file = File::open(path)?;
        let mut buf = Vec::new();
        file.take(max_bytes).read_to_end(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disclaimer_en.txt");
        assert!(!LocalDocumentSource.exists(&path));
        fs::write(&path, "terms").unwrap();
        assert!(LocalDocumentSource.exists(&path));
    }

    #[test]
    fn test_read_prefix_caps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        fs::write(&path, vec![b'z'; 4096]).unwrap();

        let bytes = LocalDocumentSource.read_prefix(&path, 100).unwrap();
        assert_eq!(bytes.len(), 100);

        let bytes = LocalDocumentSource.read_prefix(&path, 10_000).unwrap();
        assert_eq!(bytes.len(), 4096);
    }

    #[test]
    fn test_empty_file_reads_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert_eq!(LocalDocumentSource.read_prefix(&path, 10).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_directory_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalDocumentSource.exists(dir.path()));
        assert!(LocalDocumentSource.read_prefix(dir.path(), 10).is_err());
    }
}
