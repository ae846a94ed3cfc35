//! Multi-locale build orchestration.
//!
//! # Architecture
//!
//! ```text
//! Localizer::new()
//!     │
//!     ├── validate locale list ──► ConfigError (fatal, no partial build)
//!     └── TranslationStore::load_all()
//!
//! Localizer::build_site()
//!     │
//!     └── for each locale, in configured order:
//!             ├── LocaleContext::derive()     (first locale = default)
//!             ├── SiteBuilder::build(ctx)
//!             └── relocate_default_output()   (default pass, subfolder mode)
//! ```
//!
//! Contexts are derived fresh from immutable roots on every pass, so a
//! second `build_site` call starts from exactly the same state as the first
//! and repeated builds are idempotent. Each context is fully constructed
//! before its pass touches content, so no pass can observe a stale locale.

use crate::builder::SiteBuilder;
use crate::config::SiteConfig;
use crate::content::{self, ContentItem};
use crate::includes::{self, IncludeError};
use crate::locale::LocaleContext;
use crate::log;
use crate::output;
use crate::permalink;
use crate::translations::{TranslationError, TranslationStore, TranslationValue};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The localization engine: validated configuration plus loaded translation
/// tables, shared by every pass of a build.
///
/// Doubles as the capability surface the external builder calls at its
/// extension points while rendering.
pub struct Localizer<'c> {
    config: &'c SiteConfig,
    translations: TranslationStore,
}

impl<'c> Localizer<'c> {
    /// Validate configuration and load every locale's translation table.
    ///
    /// Fails fast on an invalid locale list and on a missing or malformed
    /// default-locale translation document; there is no meaningful partial
    /// build without either. Other locales' load failures only degrade
    /// those locales to fallback lookups.
    pub fn new(config: &'c SiteConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            log!("error"; "{err}");
            return Err(err.into());
        }

        let mut translations = TranslationStore::new(&config.i18n);
        if let Err(err) = translations.load_all(&config.i18n_dir()) {
            log!("error"; "{err}");
            return Err(err.into());
        }

        Ok(Self {
            config,
            translations,
        })
    }

    /// The configuration this build runs under.
    pub fn config(&self) -> &SiteConfig {
        self.config
    }

    /// The loaded translation store.
    pub fn translations(&self) -> &TranslationStore {
        &self.translations
    }

    // ========================================================================
    // Orchestration
    // ========================================================================

    /// Build the site once per configured locale, default locale first.
    ///
    /// The default locale renders at the output root (or its own subfolder
    /// when forced, in which case the root-only files are relocated right
    /// after its pass); every other locale renders under
    /// `<output>/<locale>` with `/<locale>` appended to its base-URL. Any
    /// pass failure aborts the whole orchestration.
    pub fn build_site<B: SiteBuilder>(&self, builder: &mut B) -> Result<()> {
        let i18n = &self.config.i18n;

        for (index, locale) in i18n.locales.iter().enumerate() {
            let is_default = index == 0;
            let ctx = LocaleContext::derive(
                locale,
                is_default,
                &self.config.base.baseurl,
                &self.config.build.output,
                i18n.default_locale_in_subfolder,
            )?;

            let territory = ctx
                .tag
                .territory()
                .map(|t| format!("` and territory: `{t}"))
                .unwrap_or_default();
            log!(
                "build";
                "building site for language: `{}{territory}` to: `{}`",
                ctx.tag.language(),
                ctx.dest.display()
            );

            builder
                .build(&ctx, self)
                .with_context(|| format!("build failed for locale `{locale}`"))?;

            if is_default && i18n.default_locale_in_subfolder {
                output::relocate_default_output(&ctx, &i18n.exclude_from_localizations)?;
            }
        }

        log!("build"; "complete");
        Ok(())
    }

    // ========================================================================
    // Capability surface (called by the builder at its extension points)
    // ========================================================================

    /// Whether a content item participates in the current pass.
    pub fn include_item(&self, item: &ContentItem, ctx: &LocaleContext) -> bool {
        content::included_in_locale(item, ctx)
    }

    /// The item's effective permalink for the current pass.
    pub fn resolve_permalink(&self, item: &ContentItem, ctx: &LocaleContext) -> Option<String> {
        permalink::effective_permalink(item, Some(ctx), self.config.i18n.relative_permalinks)
    }

    /// Strip the locale-subdirectory artifacts from an item's categories.
    pub fn populate_categories(&self, item: &mut ContentItem, ctx: &LocaleContext) {
        content::scrub_categories(&mut item.categories, ctx);
    }

    /// Source directory for a time-ordered content family in this pass.
    pub fn localized_content_dir(&self, family: &str, ctx: &LocaleContext) -> PathBuf {
        content::localized_content_dir(
            &self.config.build.source,
            family,
            ctx,
            &self.config.i18n.exclude_from_localizations,
        )
    }

    /// Whether a static file belongs in this pass's output.
    pub fn keep_static_file(&self, rel: &Path, ctx: &LocaleContext) -> bool {
        output::keep_static_file(rel, ctx, &self.config.i18n)
    }

    /// Prune a static-file set down to this pass's output.
    pub fn retain_localized(&self, files: &mut Vec<PathBuf>, ctx: &LocaleContext) {
        output::retain_localized(files, ctx, &self.config.i18n);
    }

    // ========================================================================
    // Template operations
    // ========================================================================

    /// `translate` / `t`: resolve a key to text for the current pass.
    pub fn translate_text(
        &self,
        ctx: &LocaleContext,
        key: &str,
    ) -> Result<String, TranslationError> {
        self.translations.translate_text(ctx.tag.as_str(), key)
    }

    /// Typed form of [`Self::translate_text`] for hosts that want the
    /// structured value.
    pub fn translate(
        &self,
        ctx: &LocaleContext,
        key: &str,
    ) -> Result<Option<&TranslationValue>, TranslationError> {
        self.translations.translate(ctx.tag.as_str(), key)
    }

    /// `translate_url`: cross-locale link to a namespace-tagged item.
    pub fn translate_url<'a, I>(
        &self,
        items: I,
        ctx: &LocaleContext,
        namespace: &str,
        target_locale: Option<&str>,
        strip_locale: bool,
    ) -> String
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        permalink::translate_url(items, namespace, target_locale, strip_locale, ctx)
    }

    /// `translate_link` / `tl`: raw whitespace-separated argument form
    /// (`namespace [locale] [strip]`).
    pub fn translate_link<'a, I>(&self, items: I, ctx: &LocaleContext, raw: &str) -> String
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        match permalink::parse_link_args(raw) {
            Some((namespace, target, strip)) => {
                self.translate_url(items, ctx, namespace, target, strip)
            }
            None => String::new(),
        }
    }

    /// `translate_file` / `tf`: resolve a localized include file.
    pub fn resolve_include(
        &self,
        ctx: &LocaleContext,
        file: &str,
    ) -> Result<PathBuf, IncludeError> {
        includes::resolve_include(
            &self.config.build.source,
            ctx.tag.as_str(),
            self.config.i18n.default_locale(),
            file,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
