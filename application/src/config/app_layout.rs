//! Static deployment layout.
//!
//! Where the documents live and how they are named. Unlike the key/value
//! settings this does not change at runtime.

use disclaimer_domain::{APP_ID, DocumentKind};
use std::path::{Path, PathBuf};

/// File-name prefix shared by every deployed document.
pub const DEFAULT_FILE_PREFIX: &str = "disclaimer";

/// Document directories and naming for one deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    /// Application id; also the config and URL namespace.
    pub app_id: String,
    /// Prefix of every document file name.
    pub file_prefix: String,
    /// Directory holding `{prefix}_{lang}.txt` files.
    pub text_base_path: PathBuf,
    /// Directory holding `{prefix}_{lang}.pdf` files.
    pub pdf_base_path: PathBuf,
    /// Icon shown next to the PDF link, relative to the app's web root.
    pub pdf_icon_path: String,
}

impl Default for AppLayout {
    fn default() -> Self {
        Self {
            app_id: APP_ID.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            text_base_path: PathBuf::from("txt"),
            pdf_base_path: PathBuf::from("pdf"),
            pdf_icon_path: "pdf/icon.png".to_string(),
        }
    }
}

impl AppLayout {
    pub fn with_base_paths(
        mut self,
        text_base_path: impl Into<PathBuf>,
        pdf_base_path: impl Into<PathBuf>,
    ) -> Self {
        self.text_base_path = text_base_path.into();
        self.pdf_base_path = pdf_base_path.into();
        self
    }

    /// Base directory for the given document kind.
    pub fn base_path(&self, kind: DocumentKind) -> &Path {
        match kind {
            DocumentKind::Text => &self.text_base_path,
            DocumentKind::Pdf => &self.pdf_base_path,
        }
    }
}
