//! Aggregated disclaimer settings

mod entities;

pub use entities::{FilesPayload, Settings};
