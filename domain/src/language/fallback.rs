//! Language fallback derivation.
//!
//! A region-qualified code such as `de_DE` or `pt-BR` falls back to its
//! base subtag (`de`, `pt`). Short codes have no broader form.

/// Separators accepted between the base subtag and the region.
const SUBTAG_SEPARATORS: [char; 2] = ['_', '-'];

/// Derives broader language codes to try when the exact one is missing.
///
/// Implementations must be pure: the same input always yields the same
/// ordered sequence, and no I/O is performed.
pub trait LanguageFallbackProvider: Send + Sync {
    /// Ordered fallback codes for `lang`, most specific first.
    fn fallbacks_for(&self, lang: &str) -> Vec<String>;
}

/// Falls back from a region-qualified code to its base subtag.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtagFallback;

impl SubtagFallback {
    pub fn new() -> Self {
        Self
    }

    /// Splits `lang` into its base subtag, if it is region-qualified.
    fn base_subtag(lang: &str) -> Option<&str> {
        let (base, region) = lang.split_once(SUBTAG_SEPARATORS)?;
        if base.is_empty() || region.is_empty() {
            return None;
        }
        Some(base)
    }
}

impl LanguageFallbackProvider for SubtagFallback {
    fn fallbacks_for(&self, lang: &str) -> Vec<String> {
        Self::base_subtag(lang)
            .map(|base| vec![base.to_string()])
            .unwrap_or_default()
    }
}
