//! CLI entrypoint for agree-disclaimer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use disclaimer_application::{
    ConfigStore, ContentLoader, CurrentUserLanguage, DiagnosticsSink, DocumentSource, FileResolver,
    FixedUserLanguage, IdentityCatalog, MessageCatalog, SettingsAggregator, UrlBuilder,
};
use disclaimer_domain::{DEFAULT_LANG, SubtagFallback};
use disclaimer_infrastructure::{
    AppUrlBuilder, ConfigLoader, EnvUserLanguage, FileConfig, FileConfigStore, JsonMessageCatalog,
    LocalDocumentSource, MemoryConfigStore, TracingDiagnostics,
};
use disclaimer_presentation::{Cli, Command, ConsoleFormatter, OutputFormat, OutputFormatter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_config_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        let file_config = ConfigLoader::load(cli.config.as_deref())
            .context("failed to load configuration")?;
        for line in file_config.describe_settings() {
            println!("{}", line);
        }
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };
    for issue in file_config.validate() {
        warn!("Configuration: {}", issue);
    }

    info!("Starting agree-disclaimer");

    // === Dependency Injection ===
    let aggregator = build_aggregator(&cli, &file_config);
    let formatter: Box<dyn OutputFormatter> =
        Box::new(ConsoleFormatter::new(&file_config.layout.app_id));

    let command = cli.command.clone().unwrap_or(Command::Settings {
        no_content: false,
        admin: false,
    });

    let output = match command {
        Command::Settings { no_content, admin } => {
            let settings = aggregator.get_settings(!no_content, admin)?;
            match cli.output {
                OutputFormat::Text => formatter.format_settings(&settings),
                OutputFormat::Json => formatter.format_settings_json(&settings),
            }
        }
        Command::Files {
            admin,
            default_lang,
        } => {
            let files = aggregator.get_files(admin, default_lang.as_deref())?;
            match cli.output {
                OutputFormat::Text => formatter.format_files(&files),
                OutputFormat::Json => formatter.format_files_json(&files),
            }
        }
    };

    println!("{}", output);

    Ok(())
}

/// Create the infrastructure adapters and inject them into the use case.
fn build_aggregator(cli: &Cli, file_config: &FileConfig) -> SettingsAggregator {
    let layout = file_config.layout.to_app_layout();

    let config: Arc<dyn ConfigStore> = if cli.no_config {
        Arc::new(MemoryConfigStore::new())
    } else {
        Arc::new(FileConfigStore::new(cli.config.clone()))
    };

    let user_language: Arc<dyn CurrentUserLanguage> =
        match cli.lang.clone().or_else(|| file_config.user.lang.clone()) {
            Some(lang) => Arc::new(FixedUserLanguage::new(lang)),
            None => Arc::new(EnvUserLanguage::new(DEFAULT_LANG)),
        };

    let catalog: Arc<dyn MessageCatalog> = match &file_config.layout.catalog {
        Some(path) => match JsonMessageCatalog::from_file(path) {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                warn!("Translations disabled: {}", e);
                Arc::new(IdentityCatalog)
            }
        },
        None => Arc::new(IdentityCatalog),
    };

    let urls: Arc<dyn UrlBuilder> = Arc::new(AppUrlBuilder::new(&file_config.layout.web_root));
    let source: Arc<dyn DocumentSource> = Arc::new(LocalDocumentSource::new());
    let diagnostics: Arc<dyn DiagnosticsSink> = Arc::new(TracingDiagnostics);

    let resolver = FileResolver::new(
        source.clone(),
        Arc::new(SubtagFallback::new()),
        catalog,
        urls.clone(),
        &layout.app_id,
        &layout.file_prefix,
    );
    let loader = ContentLoader::new(source, diagnostics, &layout.app_id);

    SettingsAggregator::new(config, user_language, urls, layout, resolver, loader)
}
