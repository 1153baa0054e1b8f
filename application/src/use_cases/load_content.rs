//! Capped document reads.
//!
//! The cap bounds memory and response size. Content beyond it is dropped
//! silently; that is not an error. The decoded content never exceeds the
//! cap in bytes either.

use crate::ports::diagnostics::{DiagnosticsSink, Severity};
use crate::ports::document_source::DocumentSource;
use disclaimer_domain::normalize_line_breaks;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Content read from a document, or why it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CappedRead {
    pub content: String,
    /// Empty when the read succeeded.
    pub error: String,
}

impl CappedRead {
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

/// Reads at most a fixed number of bytes from the start of a document.
pub struct ContentLoader {
    source: Arc<dyn DocumentSource>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    namespace: String,
}

impl ContentLoader {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        diagnostics: Arc<dyn DiagnosticsSink>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            source,
            diagnostics,
            namespace: namespace.into(),
        }
    }

    /// Read up to `max_bytes` from `path`.
    ///
    /// A failed read yields empty content, a diagnostic message naming the
    /// path, and exactly one `Fatal` diagnostics entry. An empty file is a
    /// successful read.
    pub fn read_capped(&self, path: &Path, max_bytes: u64) -> CappedRead {
        match self.source.read_prefix(path, max_bytes) {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                CappedRead {
                    content: decode_capped(&bytes, max_bytes),
                    error: String::new(),
                }
            }
            Err(e) => {
                debug!("Read of {} failed: {}", path.display(), e);
                let message = normalize_line_breaks(&format!(
                    "Could not read contents from file:\n{}\n\nMake sure that the file exists \
                     and that it is readable by the web server user",
                    path.display()
                ));
                self.diagnostics
                    .log(&self.namespace, &message, Severity::Fatal);
                CappedRead {
                    content: String::new(),
                    error: message,
                }
            }
        }
    }
}

/// UTF-8 decode of at most `max_bytes` of output.
///
/// A sequence cut short at the end of `bytes` is dropped. Invalid bytes
/// become U+FFFD, and the result is then cut back to `max_bytes` at a char
/// boundary, since each replacement is wider than the byte it stands for.
fn decode_capped(bytes: &[u8], max_bytes: u64) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, invalid) = rest.split_at(e.valid_up_to());
                text.push_str(&String::from_utf8_lossy(valid));
                match e.error_len() {
                    Some(len) => {
                        text.push(char::REPLACEMENT_CHARACTER);
                        rest = &invalid[len..];
                    }
                    None => break,
                }
            }
        }
    }

    let max_len = usize::try_from(max_bytes).unwrap_or(usize::MAX);
    if text.len() > max_len {
        let mut end = max_len;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::diagnostics::RecordingDiagnostics;
    use crate::use_cases::test_support::MemoryDocuments;

    fn loader(docs: MemoryDocuments) -> (ContentLoader, Arc<RecordingDiagnostics>) {
        let diagnostics = Arc::new(RecordingDiagnostics::new());
        let loader = ContentLoader::new(Arc::new(docs), diagnostics.clone(), "agreedisclaimer");
        (loader, diagnostics)
    }

    #[test]
    fn test_short_file_returned_whole() {
        let (loader, diagnostics) =
            loader(MemoryDocuments::new().with_file("/d/a.txt", "Terms apply."));
        let read = loader.read_capped(Path::new("/d/a.txt"), 1024);
        assert_eq!(read.content, "Terms apply.");
        assert!(read.is_ok());
        assert!(diagnostics.entries().is_empty());
    }

    #[test]
    fn test_long_file_silently_truncated() {
        let (loader, _) = loader(MemoryDocuments::new().with_file("/d/a.txt", vec![b'x'; 5000]));
        let read = loader.read_capped(Path::new("/d/a.txt"), 1024);
        assert_eq!(read.content.len(), 1024);
        assert_eq!(read.error, "");
    }

    #[test]
    fn test_empty_file_is_not_a_failure() {
        let (loader, diagnostics) = loader(MemoryDocuments::new().with_file("/d/a.txt", ""));
        let read = loader.read_capped(Path::new("/d/a.txt"), 1024);
        assert_eq!(read.content, "");
        assert!(read.is_ok());
        assert!(diagnostics.entries().is_empty());
    }

    #[test]
    fn test_unreadable_file_logs_once() {
        let (loader, diagnostics) = loader(MemoryDocuments::new().with_unreadable("/d/a.txt"));
        let read = loader.read_capped(Path::new("/d/a.txt"), 1024);

        assert_eq!(read.content, "");
        assert!(read.error.contains("/d/a.txt"));
        assert!(read.error.contains("\n"));
        assert!(!read.error.contains("\\n"));

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Fatal);
        assert_eq!(entries[0].namespace, "agreedisclaimer");
        assert_eq!(entries[0].message, read.error);
    }

    #[test]
    fn test_char_split_by_cap_is_dropped() {
        let (loader, _) = loader(MemoryDocuments::new().with_file("/d/a.txt", "aé"));
        let read = loader.read_capped(Path::new("/d/a.txt"), 2);
        assert_eq!(read.content, "a");
        assert!(read.is_ok());
    }

    #[test]
    fn test_multibyte_text_within_cap_is_whole() {
        let (loader, _) = loader(MemoryDocuments::new().with_file("/d/a.txt", "Größe"));
        let read = loader.read_capped(Path::new("/d/a.txt"), 1024);
        assert_eq!(read.content, "Größe");
    }

    #[test]
    fn test_latin1_content_stays_within_cap() {
        let docs = MemoryDocuments::new().with_file("/d/a.txt", vec![0xE4; 4096]);
        let (loader, _) = loader(docs);
        let read = loader.read_capped(Path::new("/d/a.txt"), 1024);
        assert!(read.content.len() <= 1024);
        assert_eq!(read.content.len(), 1023);
        assert!(read.content.chars().all(|c| c == char::REPLACEMENT_CHARACTER));
        assert_eq!(read.error, "");
    }

    #[test]
    fn test_invalid_byte_mid_text_is_replaced() {
        let docs = MemoryDocuments::new().with_file("/d/a.txt", b"Gr\xF6\xDFe ok".to_vec());
        let (loader, _) = loader(docs);
        let read = loader.read_capped(Path::new("/d/a.txt"), 1024);
        assert_eq!(read.content, "Gr\u{FFFD}\u{FFFD}e ok");
    }

    #[test]
    fn test_decode_never_exceeds_cap() {
        for cap in 0..8u64 {
            for input in [&b"a\xE4b"[..], "aé€".as_bytes(), &[0xFF; 8][..]] {
                let prefix = &input[..input.len().min(cap as usize)];
                assert!(decode_capped(prefix, cap).len() as u64 <= cap, "cap {cap}");
            }
        }
    }
}
