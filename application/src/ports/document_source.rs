//! Document source port.
//!
//! The only blocking operations the resolver performs: an existence check
//! and a bounded read from the start of a file.

use std::io;
use std::path::Path;

/// Port for locating and reading disclaimer documents.
pub trait DocumentSource: Send + Sync {
    /// Whether a document exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read at most `max_bytes` from the start of the document.
    ///
    /// An empty document is `Ok(vec![])`, never an error.
    fn read_prefix(&self, path: &Path, max_bytes: u64) -> io::Result<Vec<u8>>;
}
