//! URL builder port.

/// Port for building public URLs to application assets.
pub trait UrlBuilder: Send + Sync {
    /// URL of `relative_path` inside the application `namespace`.
    fn link_to(&self, namespace: &str, relative_path: &str) -> String;
}
