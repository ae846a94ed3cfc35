//! Per-locale translation tables with locale-fallback resolution.
//!
//! Tables load once (before the first build pass) and are never mutated
//! afterwards; they live for the store's lifetime so template lookups never
//! re-parse documents. Lookup misses walk an explicit fallback chain:
//! requested locale, then the bare language when it is distinct and itself
//! configured, then the default locale as the terminal entry.

use super::{TranslationError, TranslationValue};
use crate::config::I18nConfig;
use crate::log;
use std::{collections::HashMap, fs, path::Path};

/// Holds the parsed translation table of every configured locale.
#[derive(Debug)]
pub struct TranslationStore {
    locales: Vec<String>,
    default_locale: String,
    verbose: bool,
    tables: HashMap<String, TranslationValue>,
}

impl TranslationStore {
    /// Create an empty store for the configured locale list.
    ///
    /// The list must already be validated as non-empty; the first entry is
    /// the default locale.
    pub fn new(i18n: &I18nConfig) -> Self {
        Self {
            locales: i18n.locales.clone(),
            default_locale: i18n.default_locale().to_owned(),
            verbose: i18n.verbose,
            tables: HashMap::new(),
        }
    }

    /// Read and parse one locale's translation document
    /// (`<i18n_dir>/<locale>.toml`).
    pub fn load(i18n_dir: &Path, locale: &str) -> Result<TranslationValue, TranslationError> {
        let path = i18n_dir.join(format!("{locale}.toml"));
        let content = fs::read_to_string(&path)
            .map_err(|err| TranslationError::Read(path.clone(), err))?;
        let value: toml::Value =
            toml::from_str(&content).map_err(|err| TranslationError::Parse(path, err))?;
        Ok(TranslationValue::from(value))
    }

    /// Load the translation document of every configured locale.
    ///
    /// A load failure for the default locale aborts: every fallback chain
    /// terminates there, so the build has no baseline without it. Any other
    /// locale's failure only degrades that locale to fallback lookups.
    pub fn load_all(&mut self, i18n_dir: &Path) -> Result<(), TranslationError> {
        for locale in self.locales.clone() {
            log!("i18n"; "loading translations from `{}`", i18n_dir.join(format!("{locale}.toml")).display());

            match Self::load(i18n_dir, &locale) {
                Ok(table) => {
                    self.tables.insert(locale, table);
                }
                Err(err) if locale == self.default_locale => return Err(err),
                Err(err) => {
                    log!("warn"; "translations for `{locale}` unavailable, lookups fall back: {err}");
                }
            }
        }
        Ok(())
    }

    /// The loaded table for a locale, if its document loaded successfully.
    pub fn table(&self, locale: &str) -> Option<&TranslationValue> {
        self.tables.get(locale)
    }

    /// The fallback chain for a locale: the locale itself, the bare language
    /// when distinct and configured, and the default locale as terminal
    /// entry. Each step strictly reduces specificity, so the walk is a
    /// bounded loop.
    pub fn fallback_chain<'a>(&'a self, locale: &'a str) -> Vec<&'a str> {
        let mut chain = vec![locale];

        let language = locale.split('-').next().unwrap_or(locale);
        if language != locale && self.locales.iter().any(|l| l == language) {
            chain.push(language);
        }
        if *chain.last().unwrap() != self.default_locale {
            chain.push(&self.default_locale);
        }

        chain
    }

    /// Resolve a dotted key for a locale, walking the fallback chain.
    ///
    /// The first chain entry resolving to a non-absent, non-empty value
    /// wins. The terminal (default-locale) result is returned as the final
    /// answer even when absent or empty; a per-key miss is never an error.
    /// A structurally invalid lookup propagates as
    /// [`TranslationError::Access`]. A chain locale whose document failed to
    /// load counts as absent.
    pub fn translate(
        &self,
        locale: &str,
        key: &str,
    ) -> Result<Option<&TranslationValue>, TranslationError> {
        let chain = self.fallback_chain(locale);
        let terminal = chain.len() - 1;

        for (step, entry) in chain.iter().enumerate() {
            let resolved = match self.tables.get(*entry) {
                Some(table) => table.resolve(key)?,
                None => None,
            };

            let missing = resolved.is_none_or(TranslationValue::is_empty);
            if !missing || step == terminal {
                return Ok(resolved);
            }
            if self.verbose {
                log!("i18n"; "missing key `{entry}:{key}`, falling back to `{}`", chain[step + 1]);
            }
        }

        unreachable!("fallback chain is never empty")
    }

    /// Template operation: resolve a key to text.
    ///
    /// Returns the found scalar's text, or the empty string when the key is
    /// absent everywhere or resolves to a structured value.
    pub fn translate_text(&self, locale: &str, key: &str) -> Result<String, TranslationError> {
        Ok(self
            .translate(locale, key)?
            .and_then(TranslationValue::as_str)
            .unwrap_or_default()
            .to_owned())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_for(locales: &[&str]) -> TranslationStore {
        let i18n = I18nConfig {
            locales: locales.iter().map(|l| (*l).to_owned()).collect(),
            ..Default::default()
        };
        TranslationStore::new(&i18n)
    }

    fn write_doc(dir: &Path, locale: &str, doc: &str) {
        fs::write(dir.join(format!("{locale}.toml")), doc).unwrap();
    }

    // ------------------------------------------------------------------------
    // Fallback chain
    // ------------------------------------------------------------------------

    #[test]
    fn test_chain_plain_locale() {
        let store = store_for(&["en", "fr"]);
        assert_eq!(store.fallback_chain("fr"), vec!["fr", "en"]);
        assert_eq!(store.fallback_chain("en"), vec!["en"]);
    }

    #[test]
    fn test_chain_territory_with_unconfigured_language() {
        // "pt" is not configured, so pt-BR falls straight to the default
        let store = store_for(&["en", "pt-BR"]);
        assert_eq!(store.fallback_chain("pt-BR"), vec!["pt-BR", "en"]);
    }

    #[test]
    fn test_chain_territory_with_configured_language() {
        let store = store_for(&["en", "pt", "pt-BR"]);
        assert_eq!(store.fallback_chain("pt-BR"), vec!["pt-BR", "pt", "en"]);
    }

    #[test]
    fn test_chain_default_with_territory() {
        // The terminal entry is always the default locale, even when the
        // chain already visited it
        let store = store_for(&["pt-BR", "pt"]);
        assert_eq!(store.fallback_chain("pt-BR"), vec!["pt-BR", "pt", "pt-BR"]);
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    #[test]
    fn test_load_all_missing_default_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "fr", r#"k = "v""#);

        let mut store = store_for(&["en", "fr"]);
        let err = store.load_all(dir.path()).unwrap_err();
        assert!(err.is_load());
    }

    #[test]
    fn test_load_all_missing_non_default_degrades() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "en", r#"k = "v""#);

        let mut store = store_for(&["en", "fr"]);
        store.load_all(dir.path()).unwrap();

        assert!(store.table("en").is_some());
        assert!(store.table("fr").is_none());
        // fr lookups degrade to the default locale's table
        assert_eq!(store.translate_text("fr", "k").unwrap(), "v");
    }

    #[test]
    fn test_load_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "en", "k = [unterminated");

        let err = TranslationStore::load(dir.path(), "en").unwrap_err();
        assert!(matches!(err, TranslationError::Parse(..)));
    }

    // ------------------------------------------------------------------------
    // Fallback resolution
    // ------------------------------------------------------------------------

    #[test]
    fn test_fallback_to_default_locale() {
        // pt-BR misses K, pt is not configured, default en has it
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "en", r#"K = "v""#);
        write_doc(dir.path(), "pt-BR", r#"other = "x""#);

        let mut store = store_for(&["en", "pt-BR"]);
        store.load_all(dir.path()).unwrap();

        assert_eq!(store.translate_text("pt-BR", "K").unwrap(), "v");
    }

    #[test]
    fn test_fallback_prefers_configured_bare_language() {
        // pt-BR misses K, configured pt has it: the bare language wins over
        // the default locale
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "en", r#"K = "default""#);
        write_doc(dir.path(), "pt", r#"K = "w""#);
        write_doc(dir.path(), "pt-BR", r#"other = "x""#);

        let mut store = store_for(&["en", "pt", "pt-BR"]);
        store.load_all(dir.path()).unwrap();

        assert_eq!(store.translate_text("pt-BR", "K").unwrap(), "w");
    }

    #[test]
    fn test_empty_value_triggers_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "en", r#"K = "v""#);
        write_doc(dir.path(), "fr", r#"K = """#);

        let mut store = store_for(&["en", "fr"]);
        store.load_all(dir.path()).unwrap();

        assert_eq!(store.translate_text("fr", "K").unwrap(), "v");
    }

    #[test]
    fn test_miss_everywhere_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "en", r#"other = "x""#);

        let mut store = store_for(&["en"]);
        store.load_all(dir.path()).unwrap();

        assert!(store.translate("en", "K").unwrap().is_none());
        assert_eq!(store.translate_text("en", "K").unwrap(), "");
    }

    #[test]
    fn test_access_error_propagates_through_chain() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "en", r#"a = "leaf""#);

        let mut store = store_for(&["en"]);
        store.load_all(dir.path()).unwrap();

        assert!(store.translate("en", "a.b").is_err());
    }

    #[test]
    fn test_dotted_key_through_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "en", "[menu]\nitems = [\"home\", \"about\"]");
        write_doc(dir.path(), "fr", r#"unrelated = "x""#);

        let mut store = store_for(&["en", "fr"]);
        store.load_all(dir.path()).unwrap();

        assert_eq!(store.translate_text("fr", "menu.items.1").unwrap(), "about");
    }
}
