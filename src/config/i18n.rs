//! `[i18n]` section configuration.
//!
//! The localization surface: the ordered locale list plus the flags
//! controlling permalink resolution and output partitioning.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[i18n]` section in lingora.toml - localization settings.
///
/// The first entry of `locales` is the *default locale*: it renders at the
/// site root (unless `default_locale_in_subfolder` forces it into its own
/// subfolder) and terminates every translation fallback chain.
///
/// # Example
/// ```toml
/// [i18n]
/// locales = ["en", "pt", "pt-BR"]
/// exclude_from_localizations = ["downloads/manual.pdf", "robots.txt"]
/// default_locale_in_subfolder = false
/// verbose = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    /// Ordered locale tags (`language[-territory]`). Insertion order is
    /// significant: the first entry is the default locale. Must be non-empty.
    #[serde(default = "defaults::i18n::locales")]
    #[educe(Default = defaults::i18n::locales())]
    pub locales: Vec<String>,

    /// Relative paths that must stay locale-invariant: never copied into
    /// locale subfolders, present exactly once at the site root.
    #[serde(default = "defaults::i18n::exclude_from_localizations")]
    #[educe(Default = defaults::i18n::exclude_from_localizations())]
    pub exclude_from_localizations: Vec<String>,

    /// Render the default locale into `<output>/<locale>` like every other
    /// locale, then relocate the root-only files.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub default_locale_in_subfolder: bool,

    /// Join permalinks with the item's directory instead of consulting
    /// per-locale overrides.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub relative_permalinks: bool,

    /// Emit a diagnostic for every translation key that misses and falls
    /// back. Informational only.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub verbose: bool,
}

impl I18nConfig {
    /// The default locale: first entry of the configured list.
    ///
    /// # Panics
    /// Panics on an empty list; `SiteConfig::validate` rejects that before
    /// any caller gets here.
    pub fn default_locale(&self) -> &str {
        &self.locales[0]
    }

    /// Whether a locale tag appears in the configured list.
    pub fn has_locale(&self, tag: &str) -> bool {
        self.locales.iter().any(|l| l == tag)
    }
}
