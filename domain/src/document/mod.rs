//! Disclaimer documents and their resolution results

mod file_info;
mod naming;

pub use file_info::FileInfo;
pub use naming::{DocumentKind, DocumentName};
