//! [`CurrentUserLanguage`] from POSIX locale variables.
//!
//! `LC_ALL`, `LC_MESSAGES` and `LANG` are consulted in that order. Encoding
//! and modifier suffixes are dropped: `de_DE.UTF-8@euro` becomes `de_DE`.

use disclaimer_application::CurrentUserLanguage;
use std::env;

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reads the user's language from the environment on every call.
#[derive(Debug, Clone)]
pub struct EnvUserLanguage {
    fallback: String,
}

impl EnvUserLanguage {
    /// `fallback` is used when no usable locale is set.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> String {
        LOCALE_VARS
            .iter()
            .filter_map(|&var| lookup(var))
            .find_map(|value| strip_locale(&value))
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl CurrentUserLanguage for EnvUserLanguage {
    fn current_language(&self) -> String {
        self.resolve_with(|var| env::var(var).ok())
    }
}

/// Language part of a locale string; `None` for `C`/`POSIX` or empty values.
fn strip_locale(value: &str) -> Option<String> {
    let lang = value.split(['.', '@']).next().unwrap_or_default().trim();
    match lang {
        "" | "C" | "POSIX" => None,
        lang => Some(lang.to_string()),
    }
}
