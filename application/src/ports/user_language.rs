//! Current user language port.

/// Supplies the caller's active language code.
///
/// Only consulted outside the admin context.
pub trait CurrentUserLanguage: Send + Sync {
    fn current_language(&self) -> String;
}

/// A fixed language, e.g. from a command-line flag.
#[derive(Debug, Clone)]
pub struct FixedUserLanguage(pub String);

impl FixedUserLanguage {
    pub fn new(lang: impl Into<String>) -> Self {
        Self(lang.into())
    }
}

impl CurrentUserLanguage for FixedUserLanguage {
    fn current_language(&self) -> String {
        self.0.clone()
    }
}
