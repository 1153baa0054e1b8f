//! Typed view of the disclaimer settings.
//!
//! Absent keys fall back to the registry defaults; present but malformed
//! values are errors.

use crate::ports::config_store::ConfigSnapshot;
use disclaimer_domain::{ConfigError, SettingKey, TextSizeLimit, parse_bool, parse_size_mb};
use tracing::debug;

/// Settings read from one [`ConfigSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclaimerConfig {
    pub text_enabled: bool,
    pub pdf_enabled: bool,
    pub default_lang: String,
    pub max_text_size: TextSizeLimit,
}

impl DisclaimerConfig {
    /// Read every setting from `values`.
    pub fn read(values: &ConfigSnapshot) -> Result<Self, ConfigError> {
        let text_enabled = read_flag(values, SettingKey::TextEnabled)?;
        let pdf_enabled = read_flag(values, SettingKey::PdfEnabled)?;
        let default_lang = Self::read_default_lang(values)?;
        let max_text_size = Self::read_max_text_size(values)?;

        debug!(
            text_enabled,
            pdf_enabled,
            %default_lang,
            max_text_bytes = max_text_size.bytes(),
            "Read disclaimer config"
        );

        Ok(Self {
            text_enabled,
            pdf_enabled,
            default_lang,
            max_text_size,
        })
    }

    /// Only the default language.
    pub fn read_default_lang(values: &ConfigSnapshot) -> Result<String, ConfigError> {
        let key = SettingKey::DefaultLang;
        let lang = values.get_value(key.name(), key.default_value());
        let lang = lang.trim();
        if lang.is_empty() {
            return Err(ConfigError::Empty {
                key: key.name().to_string(),
            });
        }
        Ok(lang.to_string())
    }

    /// Only the text size cap.
    pub fn read_max_text_size(values: &ConfigSnapshot) -> Result<TextSizeLimit, ConfigError> {
        let key = SettingKey::MaxTextSizeMb;
        parse_size_mb(key.name(), &values.get_value(key.name(), key.default_value()))
    }
}

fn read_flag(values: &ConfigSnapshot, key: SettingKey) -> Result<bool, ConfigError> {
    parse_bool(key.name(), &values.get_value(key.name(), key.default_value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(pairs: &[(SettingKey, &str)]) -> ConfigSnapshot {
        pairs
            .iter()
            .map(|(key, value)| (key.name().to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_store_is_empty() {
        let config = DisclaimerConfig::read(&ConfigSnapshot::new()).unwrap();
        assert_eq!(
            config,
            DisclaimerConfig {
                text_enabled: true,
                pdf_enabled: true,
                default_lang: "en".to_string(),
                max_text_size: TextSizeLimit::default(),
            }
        );
    }

    #[test]
    fn test_reads_stored_values() {
        let values = stored(&[
            (SettingKey::TextEnabled, "false"),
            (SettingKey::DefaultLang, "de"),
            (SettingKey::MaxTextSizeMb, "3"),
        ]);
        let config = DisclaimerConfig::read(&values).unwrap();
        assert!(!config.text_enabled);
        assert!(config.pdf_enabled);
        assert_eq!(config.default_lang, "de");
        assert_eq!(config.max_text_size.bytes(), 3 * 1_048_576);
    }

    #[test]
    fn test_fractional_size_is_accepted() {
        let values = stored(&[(SettingKey::MaxTextSizeMb, "1.5")]);
        let config = DisclaimerConfig::read(&values).unwrap();
        assert_eq!(config.max_text_size.bytes(), 1_572_864);
        assert_eq!(config.max_text_size.megabytes(), "1.5");
    }

    #[test]
    fn test_invalid_boolean_is_an_error() {
        let values = stored(&[(SettingKey::PdfEnabled, "maybe")]);
        let err = DisclaimerConfig::read(&values).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBoolean { .. }));
    }

    #[test]
    fn test_empty_default_lang_is_an_error() {
        let values = stored(&[(SettingKey::DefaultLang, "  ")]);
        let err = DisclaimerConfig::read(&values).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }
}
