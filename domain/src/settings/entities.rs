//! Settings aggregate and the files-only result.

use crate::config::TextSizeLimit;
use crate::document::FileInfo;
use std::path::PathBuf;

/// Effective configuration plus resolution results for one call.
///
/// Built fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_lang: String,
    pub max_text_size: TextSizeLimit,
    pub text_enabled: bool,
    pub pdf_enabled: bool,
    pub text_base_path: PathBuf,
    pub pdf_base_path: PathBuf,
    pub file_prefix: String,
    /// Language the documents were resolved for.
    pub user_lang: String,
    pub pdf_icon_url: String,
    /// Present when the text document was resolved.
    pub text_file: Option<FileInfo>,
    /// Present when the PDF document was resolved.
    pub pdf_file: Option<FileInfo>,
}

impl Settings {
    /// Read cap for the text document in bytes.
    pub fn max_text_bytes(&self) -> u64 {
        self.max_text_size.bytes()
    }
}

/// Both documents, resolved unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesPayload {
    pub text: FileInfo,
    pub pdf: FileInfo,
}
