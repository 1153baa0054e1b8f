//! Config key registry for the disclaimer settings.
//!
//! Key names carry the application id as a prefix, matching what existing
//! deployments have stored.

/// Application id, also the configuration namespace.
pub const APP_ID: &str = "agreedisclaimer";

/// Settings read from the configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Whether the text document is shown.
    TextEnabled,
    /// Whether the PDF document is offered.
    PdfEnabled,
    /// Language used when the user's language has no document.
    DefaultLang,
    /// Read cap for the text document, in megabytes.
    MaxTextSizeMb,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::TextEnabled,
        SettingKey::PdfEnabled,
        SettingKey::DefaultLang,
        SettingKey::MaxTextSizeMb,
    ];

    /// Stored key name, e.g. `agreedisclaimerTxtFile`.
    pub fn name(&self) -> &'static str {
        self.info().key
    }

    /// String default used when the key is absent.
    pub fn default_value(&self) -> &'static str {
        self.info().default
    }

    pub fn info(&self) -> &'static ConfigKeyInfo {
        match self {
            SettingKey::TextEnabled => &KNOWN_KEYS[0],
            SettingKey::PdfEnabled => &KNOWN_KEYS[1],
            SettingKey::DefaultLang => &KNOWN_KEYS[2],
            SettingKey::MaxTextSizeMb => &KNOWN_KEYS[3],
        }
    }
}

/// Metadata for a single config key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Stored key name.
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Value assumed when the key is absent.
    pub default: &'static str,
    /// Valid string values (empty if freeform).
    pub valid_values: &'static [&'static str],
}

/// All known config keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a config key by its stored name.
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.key == key)
}

static KNOWN_KEYS: [ConfigKeyInfo; 4] = [
    ConfigKeyInfo {
        key: "agreedisclaimerTxtFile",
        description: "Show the disclaimer text",
        default: "true",
        valid_values: &["true", "false"],
    },
    ConfigKeyInfo {
        key: "agreedisclaimerPdfFile",
        description: "Offer the disclaimer PDF",
        default: "true",
        valid_values: &["true", "false"],
    },
    ConfigKeyInfo {
        key: "agreedisclaimerDefaultLang",
        description: "Default language for the disclaimer documents",
        default: "en",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "agreedisclaimerMaxTxtFileSize",
        description: "Maximum size of the text file in megabytes",
        default: "1",
        valid_values: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_setting_key_is_registered() {
        for key in SettingKey::ALL {
            assert_eq!(lookup_key(key.name()).map(|k| k.key), Some(key.name()));
        }
    }

    #[test]
    fn test_lookup_nonexistent_key() {
        assert!(lookup_key("nonexistent").is_none());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SettingKey::TextEnabled.default_value(), "true");
        assert_eq!(SettingKey::PdfEnabled.default_value(), "true");
        assert_eq!(SettingKey::DefaultLang.default_value(), "en");
        assert_eq!(SettingKey::MaxTextSizeMb.default_value(), "1");
    }

    #[test]
    fn test_names_carry_app_id() {
        assert!(known_keys().iter().all(|k| k.key.starts_with(APP_ID)));
    }
}
