//! Wire payloads
//!
//! The JSON shapes returned by the two settings routes. Key names and
//! string-typed values are kept exactly as deployed clients expect them.

mod wire;

pub use wire::{files_payload, settings_payload};
