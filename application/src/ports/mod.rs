//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! All of them are synchronous: one call is one request/response.

pub mod config_store;
pub mod diagnostics;
pub mod document_source;
pub mod message_catalog;
pub mod url_builder;
pub mod user_language;
