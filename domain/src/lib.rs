//! Domain layer for agree-disclaimer
//!
//! This crate contains the entities and value objects used to locate a
//! localized disclaimer document. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Documents
//!
//! A disclaimer is published as a plain text file and/or a PDF. Each
//! language variant lives on disk as `{prefix}_{lang}.{ext}` under a base
//! directory configured per [`DocumentKind`].
//!
//! ## Fallback chain
//!
//! When the exact language variant is missing, broader codes supplied by a
//! [`LanguageFallbackProvider`] are tried, then the configured default.

pub mod config;
pub mod document;
pub mod language;
pub mod settings;
pub mod util;

// Re-export commonly used types
pub use config::{
    APP_ID, BYTES_PER_MB, ConfigError, DEFAULT_LANG, SettingKey, TextSizeLimit, parse_bool,
    parse_size_mb,
};
pub use document::{DocumentKind, DocumentName, FileInfo};
pub use language::{LanguageFallbackProvider, SubtagFallback};
pub use settings::{FilesPayload, Settings};
pub use util::text::normalize_line_breaks;
