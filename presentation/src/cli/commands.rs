//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// The JSON payload an HTTP route would return
    Json,
}

/// CLI arguments for agree-disclaimer
#[derive(Parser, Debug)]
#[command(name = "agree-disclaimer")]
#[command(author, version, about = "Resolve the localized disclaimer shown before login")]
#[command(long_about = r#"
agree-disclaimer locates the disclaimer documents (text and PDF) for a user's
language, falling back to the base language and then the configured default.

Documents are named {prefix}_{lang}.txt and {prefix}_{lang}.pdf and live in
one directory per kind.

Configuration files are loaded from (in priority order):
1. DISCLAIMER_* environment variables
2. --config <path>     Explicit config file
3. ./disclaimer.toml   Project-level config
4. ~/.config/agree-disclaimer/config.toml   Global config

Example:
  agree-disclaimer settings --admin
  agree-disclaimer --lang de_DE files
  agree-disclaimer --lang fr -o json files --default-lang en
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Language of the current user (defaults to [user] lang, then the locale)
    #[arg(short, long, value_name = "LANG", global = true)]
    pub lang: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands, one per payload shape
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full settings, as shown by the administration view
    Settings {
        /// Skip reading the text document's content
        #[arg(long)]
        no_content: bool,

        /// Resolve as the administration view: default language, no fallback
        #[arg(long)]
        admin: bool,
    },

    /// Text and PDF documents, as fetched at login
    Files {
        /// Resolve as the administration view: default language, no fallback
        #[arg(long)]
        admin: bool,

        /// Use this default language instead of the configured one
        #[arg(long, value_name = "LANG")]
        default_lang: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings() {
        let cli = Cli::parse_from(["agree-disclaimer", "settings", "--admin", "--no-content"]);
        assert_eq!(
            cli.command,
            Some(Command::Settings {
                no_content: true,
                admin: true
            })
        );
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_parse_files_with_globals() {
        let cli = Cli::parse_from([
            "agree-disclaimer",
            "files",
            "--default-lang",
            "de",
            "--lang",
            "fr",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Files {
                admin: false,
                default_lang: Some("de".to_string())
            })
        );
        assert_eq!(cli.lang.as_deref(), Some("fr"));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_command_is_optional_for_show_config() {
        let cli = Cli::parse_from(["agree-disclaimer", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
