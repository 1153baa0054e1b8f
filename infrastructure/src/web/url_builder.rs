//! [`UrlBuilder`] for application assets under a web root.

use disclaimer_application::UrlBuilder;

/// Builds `{web_root}/apps/{namespace}/{relative_path}`.
#[derive(Debug, Clone, Default)]
pub struct AppUrlBuilder {
    web_root: String,
}

impl AppUrlBuilder {
    pub fn new(web_root: impl Into<String>) -> Self {
        Self {
            web_root: web_root.into().trim_end_matches('/').to_string(),
        }
    }
}

impl UrlBuilder for AppUrlBuilder {
    fn link_to(&self, namespace: &str, relative_path: &str) -> String {
        format!(
            "{}/apps/{}/{}",
            self.web_root,
            namespace,
            relative_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_without_web_root() {
        let urls = AppUrlBuilder::default();
        assert_eq!(
            urls.link_to("agreedisclaimer", "pdf/icon.png"),
            "/apps/agreedisclaimer/pdf/icon.png"
        );
    }

    #[test]
    fn test_link_with_web_root() {
        let urls = AppUrlBuilder::new("/cloud/");
        assert_eq!(
            urls.link_to("agreedisclaimer", "/txt/disclaimer_en.txt"),
            "/cloud/apps/agreedisclaimer/txt/disclaimer_en.txt"
        );
    }
}
