//! Language codes and fallback derivation

mod fallback;

pub use fallback::{LanguageFallbackProvider, SubtagFallback};
