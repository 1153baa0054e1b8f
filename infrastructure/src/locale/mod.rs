//! Current user language from the process environment

mod env_language;

pub use env_language::EnvUserLanguage;
