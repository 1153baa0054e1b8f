//! Localized document resolution.
//!
//! Finds the first existing `{prefix}_{lang}.{ext}` among the requested
//! language, its fallbacks and the default language, and describes the
//! outcome as a [`FileInfo`].

use crate::ports::document_source::DocumentSource;
use crate::ports::message_catalog::MessageCatalog;
use crate::ports::url_builder::UrlBuilder;
use disclaimer_domain::{
    DocumentKind, DocumentName, FileInfo, LanguageFallbackProvider, normalize_line_breaks,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub const MSG_DOESNT_EXIST: &str = "%s doesn't exist";
pub const MSG_NEITHER_EXISTS: &str = "Neither the file: %s nor: %s exist";
pub const MSG_CONTACT_WEBMASTER: &str = "Please contact the webmaster";

/// Locates the best language variant of a document.
///
/// Never fails: a missing document is reported through [`FileInfo::error`].
/// Content is never read here.
pub struct FileResolver {
    source: Arc<dyn DocumentSource>,
    fallbacks: Arc<dyn LanguageFallbackProvider>,
    catalog: Arc<dyn MessageCatalog>,
    urls: Arc<dyn UrlBuilder>,
    namespace: String,
    file_prefix: String,
}

impl FileResolver {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        fallbacks: Arc<dyn LanguageFallbackProvider>,
        catalog: Arc<dyn MessageCatalog>,
        urls: Arc<dyn UrlBuilder>,
        namespace: impl Into<String>,
        file_prefix: impl Into<String>,
    ) -> Self {
        Self {
            source,
            fallbacks,
            catalog,
            urls,
            namespace: namespace.into(),
            file_prefix: file_prefix.into(),
        }
    }

    /// Resolve the `kind` document for `user_lang` under `base_path`.
    ///
    /// Search order: `user_lang`, then (with `use_fallback`) its fallbacks,
    /// then `default_lang` when it differs from `user_lang`. The first hit
    /// wins. When nothing exists, `name`/`path`/`url` describe the last
    /// candidate examined and `lang` stays `user_lang`.
    pub fn resolve(
        &self,
        user_lang: &str,
        default_lang: &str,
        base_path: &Path,
        kind: DocumentKind,
        use_fallback: bool,
    ) -> FileInfo {
        let requested = DocumentName::new(&self.file_prefix, user_lang, kind);
        let requested_path = requested.path_in(base_path);
        if self.source.exists(&requested_path) {
            return self.found(&requested, requested_path);
        }
        debug!("No {} document at {}", kind, requested_path.display());

        let mut last = (requested, requested_path.clone());
        for lang in self.candidates(user_lang, default_lang, use_fallback) {
            let name = DocumentName::new(&self.file_prefix, lang, kind);
            let path = name.path_in(base_path);
            if self.source.exists(&path) {
                debug!("Falling back to {} for {}", name.lang(), user_lang);
                return self.found(&name, path);
            }
            debug!("No {} document at {}", kind, path.display());
            last = (name, path);
        }

        let default_path = (user_lang != default_lang).then(|| {
            DocumentName::new(&self.file_prefix, default_lang, kind).path_in(base_path)
        });
        let error = self.missing_error(&requested_path, default_path.as_deref());
        let (name, path) = last;
        FileInfo::missing(user_lang, name.file_name(), path, self.url_for(&name), error)
    }

    /// Languages to try after `user_lang`, in order, without repeats.
    fn candidates(&self, user_lang: &str, default_lang: &str, use_fallback: bool) -> Vec<String> {
        let mut langs = Vec::new();
        if use_fallback {
            langs.extend(self.fallbacks.fallbacks_for(user_lang));
        }
        if user_lang != default_lang {
            langs.push(default_lang.to_string());
        }

        let mut unique: Vec<String> = Vec::with_capacity(langs.len());
        for lang in langs {
            if lang != user_lang && !unique.contains(&lang) {
                unique.push(lang);
            }
        }
        unique
    }

    fn found(&self, name: &DocumentName, path: PathBuf) -> FileInfo {
        FileInfo::found(name.lang(), name.file_name(), path, self.url_for(name))
    }

    fn url_for(&self, name: &DocumentName) -> String {
        self.urls.link_to(&self.namespace, &name.relative_url_path())
    }

    /// Diagnostic naming the requested path, and the default-language path
    /// when a distinct default was tried.
    fn missing_error(&self, requested: &Path, default: Option<&Path>) -> String {
        let head = match default {
            Some(default) => {
                let requested = format!("<br/>{}<br/><br/>", requested.display());
                let default = format!("<br/>{}<br/><br/>", default.display());
                self.catalog
                    .translate(MSG_NEITHER_EXISTS, &[&requested, &default])
            }
            None => {
                let requested = format!("{}<br/>", requested.display());
                self.catalog.translate(MSG_DOESNT_EXIST, &[&requested])
            }
        };
        let suffix = self.catalog.translate(MSG_CONTACT_WEBMASTER, &[]);
        normalize_line_breaks(&format!("{}. {}", head, suffix))
    }
}
