//! Application layer for agree-disclaimer
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AppLayout, DisclaimerConfig};
pub use ports::{
    config_store::{ConfigSnapshot, ConfigStore, ConfigStoreError},
    diagnostics::{DiagnosticEntry, DiagnosticsSink, RecordingDiagnostics, Severity},
    document_source::DocumentSource,
    message_catalog::{IdentityCatalog, MessageCatalog, substitute},
    url_builder::UrlBuilder,
    user_language::{CurrentUserLanguage, FixedUserLanguage},
};
pub use use_cases::get_settings::{CallerContext, SettingsAggregator, SettingsError};
pub use use_cases::load_content::{CappedRead, ContentLoader};
pub use use_cases::resolve_file::FileResolver;
