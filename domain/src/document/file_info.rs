//! Result of resolving one localized document.

use serde::Serialize;
use std::path::PathBuf;

/// Outcome of locating (and optionally reading) one document.
///
/// `error` is non-empty exactly when no candidate was found, or when a
/// found document was read and the read failed. Use the constructors to
/// keep that invariant.
///
/// Truncation at the read cap is not flagged; a caller can only tell from
/// the content length. Adding a flag would change the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Whether any candidate file was found.
    pub exists: bool,
    /// Language of the selected file, or the requested one if none was found.
    pub lang: String,
    /// File name of the last candidate examined.
    pub name: String,
    /// Filesystem location of the last candidate examined.
    pub path: PathBuf,
    /// Public URL derived from `name`.
    pub url: String,
    /// Document text, present only when content was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// User-facing diagnostic, empty on success.
    pub error: String,
}

impl FileInfo {
    /// A document that was located on disk.
    pub fn found(
        lang: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            exists: true,
            lang: lang.into(),
            name: name.into(),
            path: path.into(),
            url: url.into(),
            content: None,
            error: String::new(),
        }
    }

    /// No candidate exists. `lang` is the originally requested language.
    pub fn missing(
        lang: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        url: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            exists: false,
            lang: lang.into(),
            name: name.into(),
            path: path.into(),
            url: url.into(),
            content: None,
            error: error.into(),
        }
    }

    /// Attach content read from a found document.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Record a read failure: content is empty and the error is set.
    pub fn with_read_error(mut self, error: impl Into<String>) -> Self {
        self.content = Some(String::new());
        self.error = error.into();
        self
    }

    /// Whether the document was found and (if read) read successfully.
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}
