//! Output formatter trait

use disclaimer_domain::{FilesPayload, Settings};

/// Trait for formatting resolution results
pub trait OutputFormatter {
    /// Format the full settings
    fn format_settings(&self, settings: &Settings) -> String;

    /// Format the files-only result
    fn format_files(&self, files: &FilesPayload) -> String;

    /// Format the settings as their wire JSON
    fn format_settings_json(&self, settings: &Settings) -> String;

    /// Format the files as their wire JSON
    fn format_files_json(&self, files: &FilesPayload) -> String;
}
