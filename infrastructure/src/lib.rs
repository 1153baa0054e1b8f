//! Infrastructure layer for agree-disclaimer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod diagnostics;
pub mod documents;
pub mod l10n;
pub mod locale;
pub mod web;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileConfigStore, FileLayoutConfig,
    FileUserConfig, MemoryConfigStore,
};
pub use diagnostics::TracingDiagnostics;
pub use documents::LocalDocumentSource;
pub use l10n::{CatalogError, JsonMessageCatalog};
pub use locale::EnvUserLanguage;
pub use web::AppUrlBuilder;
