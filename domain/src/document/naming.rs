//! On-disk naming convention for localized documents.
//!
//! Deployed document sets follow `{prefix}_{lang}.{ext}`, e.g.
//! `disclaimer_de_DE.txt`. The convention must not change.

use std::fmt;
use std::path::{Path, PathBuf};

/// The two document flavours a disclaimer can be published as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Plain text shown inline.
    Text,
    /// PDF offered as a download link.
    Pdf,
}

impl DocumentKind {
    /// File extension used on disk (and in the public URL).
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Text => "txt",
            DocumentKind::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A candidate document name for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentName {
    prefix: String,
    lang: String,
    kind: DocumentKind,
}

impl DocumentName {
    pub fn new(prefix: impl Into<String>, lang: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            prefix: prefix.into(),
            lang: lang.into(),
            kind,
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// `{prefix}_{lang}.{ext}`
    pub fn file_name(&self) -> String {
        format!("{}_{}.{}", self.prefix, self.lang, self.kind.extension())
    }

    /// Location of this candidate under `base_path`.
    pub fn path_in(&self, base_path: &Path) -> PathBuf {
        base_path.join(self.file_name())
    }

    /// Path relative to the application's web root, e.g. `txt/disclaimer_en.txt`.
    pub fn relative_url_path(&self) -> String {
        format!("{}/{}", self.kind.extension(), self.file_name())
    }
}
