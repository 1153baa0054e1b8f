//! Public URL construction

mod url_builder;

pub use url_builder::AppUrlBuilder;
