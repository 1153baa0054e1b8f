//! Presentation layer for agree-disclaimer
//!
//! This crate contains CLI definitions, the wire payload shapes and
//! output formatters.

pub mod cli;
pub mod output;
pub mod payload;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use payload::{files_payload, settings_payload};
