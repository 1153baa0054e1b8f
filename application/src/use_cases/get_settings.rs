//! Settings aggregation use case
//!
//! Reads the configuration, decides which language and fallback policy
//! apply to the caller, and resolves the text and PDF documents.
//!
//! Two entry points serve two callers:
//!
//! - [`SettingsAggregator::get_settings`]: the administration view; honours
//!   the enabled flags and reports the full configuration.
//! - [`SettingsAggregator::get_files`]: the login-time fetch; always resolves
//!   both documents, text with content.

use super::load_content::ContentLoader;
use super::resolve_file::FileResolver;
use crate::config::{AppLayout, DisclaimerConfig};
use crate::ports::config_store::{ConfigStore, ConfigStoreError};
use crate::ports::url_builder::UrlBuilder;
use crate::ports::user_language::CurrentUserLanguage;
use disclaimer_domain::{ConfigError, DocumentKind, FileInfo, FilesPayload, Settings};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while assembling settings.
///
/// Only configuration problems surface here; document problems are
/// reported inside [`FileInfo`].
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] ConfigStoreError),
}

/// Who is asking, which decides language and fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerContext {
    /// The administration view: default language only, no fallback.
    Admin,
    /// A user about to log in: their language, with fallback.
    User,
}

impl CallerContext {
    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            CallerContext::Admin
        } else {
            CallerContext::User
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, CallerContext::Admin)
    }
}

/// Orchestrates configuration, resolution and capped reads.
pub struct SettingsAggregator {
    config: Arc<dyn ConfigStore>,
    user_language: Arc<dyn CurrentUserLanguage>,
    urls: Arc<dyn UrlBuilder>,
    layout: AppLayout,
    resolver: FileResolver,
    loader: ContentLoader,
}

impl SettingsAggregator {
    pub fn new(
        config: Arc<dyn ConfigStore>,
        user_language: Arc<dyn CurrentUserLanguage>,
        urls: Arc<dyn UrlBuilder>,
        layout: AppLayout,
        resolver: FileResolver,
        loader: ContentLoader,
    ) -> Self {
        Self {
            config,
            user_language,
            urls,
            layout,
            resolver,
            loader,
        }
    }

    /// Full settings for the administration view.
    ///
    /// In the admin context both documents are resolved regardless of the
    /// enabled flags, for the default language, without fallback.
    pub fn get_settings(
        &self,
        include_text_content: bool,
        is_admin_context: bool,
    ) -> Result<Settings, SettingsError> {
        let context = CallerContext::from_admin_flag(is_admin_context);
        let values = self.config.snapshot(&self.layout.app_id)?;
        let config = DisclaimerConfig::read(&values)?;
        let (user_lang, use_fallback) = self.effective_language(context, &config.default_lang);
        info!(
            "Getting settings for {} (admin: {}, fallback: {})",
            user_lang,
            context.is_admin(),
            use_fallback
        );

        let text_file = (config.text_enabled || context.is_admin()).then(|| {
            let cap = include_text_content.then(|| config.max_text_size.bytes());
            self.resolve_document(
                DocumentKind::Text,
                &user_lang,
                &config.default_lang,
                use_fallback,
                cap,
            )
        });
        let pdf_file = (config.pdf_enabled || context.is_admin()).then(|| {
            self.resolve_document(
                DocumentKind::Pdf,
                &user_lang,
                &config.default_lang,
                use_fallback,
                None,
            )
        });

        Ok(Settings {
            default_lang: config.default_lang,
            max_text_size: config.max_text_size,
            text_enabled: config.text_enabled,
            pdf_enabled: config.pdf_enabled,
            text_base_path: self.layout.text_base_path.clone(),
            pdf_base_path: self.layout.pdf_base_path.clone(),
            file_prefix: self.layout.file_prefix.clone(),
            user_lang,
            pdf_icon_url: self
                .urls
                .link_to(&self.layout.app_id, &self.layout.pdf_icon_path),
            text_file,
            pdf_file,
        })
    }

    /// Both documents for the login-time fetch, independent of the enabled
    /// flags. `default_lang_override` replaces the configured default.
    pub fn get_files(
        &self,
        is_admin_context: bool,
        default_lang_override: Option<&str>,
    ) -> Result<FilesPayload, SettingsError> {
        let context = CallerContext::from_admin_flag(is_admin_context);
        let values = self.config.snapshot(&self.layout.app_id)?;
        let default_lang = match default_lang_override {
            Some(lang) => lang.to_string(),
            None => DisclaimerConfig::read_default_lang(&values)?,
        };
        let max_text_size = DisclaimerConfig::read_max_text_size(&values)?;
        let (user_lang, use_fallback) = self.effective_language(context, &default_lang);
        info!(
            "Getting files for {} (admin: {}, fallback: {})",
            user_lang,
            context.is_admin(),
            use_fallback
        );

        let text = self.resolve_document(
            DocumentKind::Text,
            &user_lang,
            &default_lang,
            use_fallback,
            Some(max_text_size.bytes()),
        );
        let pdf = self.resolve_document(
            DocumentKind::Pdf,
            &user_lang,
            &default_lang,
            use_fallback,
            None,
        );

        Ok(FilesPayload { text, pdf })
    }

    /// Language to resolve for, and whether fallback applies.
    fn effective_language(&self, context: CallerContext, default_lang: &str) -> (String, bool) {
        match context {
            CallerContext::Admin => (default_lang.to_string(), false),
            CallerContext::User => (self.user_language.current_language(), true),
        }
    }

    /// Resolve one document, reading up to `content_cap` bytes if given and found.
    fn resolve_document(
        &self,
        kind: DocumentKind,
        user_lang: &str,
        default_lang: &str,
        use_fallback: bool,
        content_cap: Option<u64>,
    ) -> FileInfo {
        let info = self.resolver.resolve(
            user_lang,
            default_lang,
            self.layout.base_path(kind),
            kind,
            use_fallback,
        );

        match content_cap {
            Some(cap) if info.exists => {
                let read = self.loader.read_capped(&info.path, cap);
                if read.is_ok() {
                    info.with_content(read.content)
                } else {
                    info.with_read_error(read.error)
                }
            }
            _ => info,
        }
    }
}
