//! Use cases (application services)
//!
//! Each use case orchestrates domain logic through ports. Data flows one
//! way: [`SettingsAggregator`](get_settings::SettingsAggregator) →
//! [`FileResolver`](resolve_file::FileResolver) →
//! [`ContentLoader`](load_content::ContentLoader).

pub mod get_settings;
pub mod load_content;
pub mod resolve_file;

#[cfg(test)]
pub(crate) mod test_support;
