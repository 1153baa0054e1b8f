//! JSON translation catalog.
//!
//! Accepts a flat JSON object mapping source templates to translations,
//! or the same object wrapped in an `OC.L10N.register("app", {...}, "...")`
//! call as shipped in existing translation files.

use disclaimer_application::{MessageCatalog, substitute};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors loading a translation catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog contains no JSON object")]
    NoObject,

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Translations loaded from a JSON catalog.
///
/// Templates without a translation pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct JsonMessageCatalog {
    translations: HashMap<String, String>,
}

impl JsonMessageCatalog {
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::parse(&text)?;
        debug!(
            "Loaded {} translations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let start = text.find('{').ok_or(CatalogError::NoObject)?;
        let end = text.rfind('}').ok_or(CatalogError::NoObject)?;
        if end < start {
            return Err(CatalogError::NoObject);
        }
        let translations: HashMap<String, String> = serde_json::from_str(&text[start..=end])?;
        Ok(Self { translations })
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl MessageCatalog for JsonMessageCatalog {
    fn translate(&self, template: &str, args: &[&str]) -> String {
        let translated = self
            .translations
            .get(template)
            .map(String::as_str)
            .unwrap_or(template);
        substitute(translated, args)
    }
}
