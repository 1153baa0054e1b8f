//! Application-level configuration.
//!
//! - [`AppLayout`]: static deployment layout (document directories, prefix)
//! - [`DisclaimerConfig`]: typed view of the key/value settings, read per call

pub mod app_layout;
pub mod disclaimer_config;

pub use app_layout::AppLayout;
pub use disclaimer_config::DisclaimerConfig;
