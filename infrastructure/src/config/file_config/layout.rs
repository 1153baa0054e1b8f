//! Layout configuration from TOML (`[layout]` section)

use disclaimer_application::AppLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw deployment layout from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLayoutConfig {
    /// Application id (config and URL namespace)
    pub app_id: String,
    /// Prefix of every document file name
    pub file_prefix: String,
    /// Directory of the text documents
    pub text_dir: PathBuf,
    /// Directory of the PDF documents
    pub pdf_dir: PathBuf,
    /// PDF icon, relative to the app's web root
    pub pdf_icon: String,
    /// Prefix prepended to every generated URL (e.g. `/cloud`)
    pub web_root: String,
    /// Translation catalog (JSON or `OC.L10N.register(...)` file)
    pub catalog: Option<PathBuf>,
}

impl Default for FileLayoutConfig {
    fn default() -> Self {
        let layout = AppLayout::default();
        Self {
            app_id: layout.app_id,
            file_prefix: layout.file_prefix,
            text_dir: layout.text_base_path,
            pdf_dir: layout.pdf_base_path,
            pdf_icon: layout.pdf_icon_path,
            web_root: String::new(),
            catalog: None,
        }
    }
}

impl FileLayoutConfig {
    pub fn to_app_layout(&self) -> AppLayout {
        AppLayout {
            app_id: self.app_id.clone(),
            file_prefix: self.file_prefix.clone(),
            text_base_path: self.text_dir.clone(),
            pdf_base_path: self.pdf_dir.clone(),
            pdf_icon_path: self.pdf_icon.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_deserialize() {
        let toml_str = r#"
[layout]
text_dir = "/data/txt"
pdf_dir = "/data/pdf"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let layout = config.layout.to_app_layout();
        assert_eq!(layout.text_base_path, PathBuf::from("/data/txt"));
        assert_eq!(layout.pdf_base_path, PathBuf::from("/data/pdf"));
        assert_eq!(layout.file_prefix, "disclaimer");
        assert_eq!(layout.app_id, "agreedisclaimer");
    }
}
