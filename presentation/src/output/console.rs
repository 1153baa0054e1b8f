//! Console output formatter for settings and documents

use crate::output::formatter::OutputFormatter;
use crate::payload::{files_payload, settings_payload};
use colored::Colorize;
use disclaimer_domain::{FileInfo, FilesPayload, Settings};

/// Lines of document content shown before eliding the rest.
const PREVIEW_LINES: usize = 5;

/// Formats results for console display
pub struct ConsoleFormatter {
    app_id: String,
}

impl ConsoleFormatter {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }

    /// Human-readable settings summary
    fn settings_text(settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Disclaimer Settings"));
        output.push('\n');
        output.push_str(&Self::field("Default language:", &settings.default_lang));
        output.push_str(&Self::field("User language:", &settings.user_lang));
        output.push_str(&Self::field(
            "Max text size:",
            &format!(
                "{} MB ({} bytes)",
                settings.max_text_size.megabytes(),
                settings.max_text_bytes()
            ),
        ));
        output.push_str(&Self::field("File prefix:", &settings.file_prefix));
        output.push_str(&Self::field("PDF icon:", &settings.pdf_icon_url));

        output.push_str(&Self::section_header(&format!(
            "Text ({}) - {}",
            Self::enabled(settings.text_enabled),
            settings.text_base_path.display()
        )));
        match &settings.text_file {
            Some(file) => output.push_str(&Self::format_file(file)),
            None => output.push_str(&format!("{}\n", "not resolved".dimmed())),
        }

        output.push_str(&Self::section_header(&format!(
            "PDF ({}) - {}",
            Self::enabled(settings.pdf_enabled),
            settings.pdf_base_path.display()
        )));
        match &settings.pdf_file {
            Some(file) => output.push_str(&Self::format_file(file)),
            None => output.push_str(&format!("{}\n", "not resolved".dimmed())),
        }

        output.push_str(&Self::footer());
        output
    }

    /// Human-readable documents summary
    fn files_text(files: &FilesPayload) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Disclaimer Documents"));
        output.push_str(&Self::section_header("Text"));
        output.push_str(&Self::format_file(&files.text));
        output.push_str(&Self::section_header("PDF"));
        output.push_str(&Self::format_file(&files.pdf));
        output.push_str(&Self::footer());
        output
    }

    fn format_file(file: &FileInfo) -> String {
        let mut output = String::new();

        if file.exists {
            output.push_str(&format!(
                "{} {} [{}]\n",
                "FOUND".green().bold(),
                file.name,
                file.lang
            ));
        } else {
            output.push_str(&format!(
                "{} {} [{}]\n",
                "MISSING".red().bold(),
                file.name,
                file.lang
            ));
        }
        output.push_str(&format!("  {} {}\n", "path:".dimmed(), file.path.display()));
        output.push_str(&format!("  {} {}\n", "url: ".dimmed(), file.url));

        if !file.error.is_empty() {
            output.push_str(&format!("{}\n", Self::indent(&file.error, "  ! ").yellow()));
        }

        if let Some(content) = &file.content {
            output.push_str(&format!(
                "  {} {} bytes\n",
                "content:".dimmed(),
                content.len()
            ));
            output.push_str(&Self::preview(content));
        }

        output
    }

    fn preview(content: &str) -> String {
        let mut lines = content.lines();
        let mut output = String::new();
        for line in lines.by_ref().take(PREVIEW_LINES) {
            output.push_str(&format!("    {}\n", line));
        }
        if lines.next().is_some() {
            output.push_str(&format!("    {}\n", "...".dimmed()));
        }
        output
    }

    fn enabled(flag: bool) -> &'static str {
        if flag { "enabled" } else { "disabled" }
    }

    fn field(label: &str, value: &str) -> String {
        format!("{} {}\n", label.cyan().bold(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_settings(&self, settings: &Settings) -> String {
        Self::settings_text(settings)
    }

    fn format_files(&self, files: &FilesPayload) -> String {
        Self::files_text(files)
    }

    fn format_settings_json(&self, settings: &Settings) -> String {
        serde_json::to_string_pretty(&settings_payload(settings, &self.app_id))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn format_files_json(&self, files: &FilesPayload) -> String {
        serde_json::to_string_pretty(&files_payload(files)).unwrap_or_else(|_| "{}".to_string())
    }
}
