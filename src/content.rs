//! Content items and per-locale filtering.
//!
//! The external builder owns content discovery and parsing; the core only
//! reads the handful of attributes relevant to localization. Three
//! independent predicates run during the builder's discovery phase:
//!
//! - an explicit `locales` allow-list on the item,
//! - locale-qualified directory scoping for time-ordered content families,
//! - cleanup of the synthetic categories the subdirectory scheme leaves
//!   behind.

use crate::config::I18N_DIR;
use crate::locale::LocaleContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The localization-relevant attributes of a page or collection document.
///
/// Owned by the external builder, which maps its own front-matter onto this
/// view; the core reads, filters, and derives from it.
#[derive(Debug, Clone, Default)]
pub struct ContentItem {
    /// Source path relative to the site source root.
    pub path: PathBuf,

    /// Directory containing the item, used by relative-permalink mode.
    pub dir: PathBuf,

    /// Explicit locale allow-list. Absent means the item participates in
    /// every locale's build.
    pub locales: Option<Vec<String>>,

    /// Cross-locale link identity; items sharing a namespace are the same
    /// logical page in different locales.
    pub namespace: Option<String>,

    /// Default permalink.
    pub permalink: Option<String>,

    /// Per-locale permalink overrides, keyed by locale tag.
    pub permalink_overrides: HashMap<String, String>,

    /// Path-derived categories, possibly polluted by the locale
    /// subdirectory scheme.
    pub categories: Vec<String>,
}

/// Whether an item participates in the current locale's build.
///
/// An item carrying a `locales` allow-list is included only when the current
/// locale is a member; items without the attribute are always included.
pub fn included_in_locale(item: &ContentItem, ctx: &LocaleContext) -> bool {
    match &item.locales {
        Some(allowed) => allowed.iter().any(|l| l == ctx.tag.as_str()),
        None => true,
    }
}

/// Source directory for a time-ordered content family (e.g. `_posts`) in
/// the current locale's pass.
///
/// Localized families read from `_i18n/<locale>/<family>`; a family listed
/// in `exclude_from_localizations` keeps its default directory. Called once
/// per pass, not per item.
pub fn localized_content_dir(
    source: &Path,
    family: &str,
    ctx: &LocaleContext,
    excludes: &[String],
) -> PathBuf {
    if excludes.iter().any(|e| e == family) {
        source.join(family)
    } else {
        source.join(I18N_DIR).join(ctx.tag.as_str()).join(family)
    }
}

/// Strip the synthetic category entries the locale subdirectory scheme
/// prepends (`_i18n` and the locale tag itself), then dedup preserving
/// first occurrence.
pub fn scrub_categories(categories: &mut Vec<String>, ctx: &LocaleContext) {
    categories.retain(|c| c != I18N_DIR && c != ctx.tag.as_str());

    let mut seen = Vec::with_capacity(categories.len());
    categories.retain(|c| {
        if seen.iter().any(|s| s == c) {
            false
        } else {
            seen.push(c.clone());
            true
        }
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(tag: &str, is_default: bool) -> LocaleContext {
        LocaleContext::derive(tag, is_default, "/site", Path::new("public"), false).unwrap()
    }

    // ------------------------------------------------------------------------
    // Allow-list predicate
    // ------------------------------------------------------------------------

    #[test]
    fn test_item_without_allow_list_always_included() {
        let item = ContentItem::default();
        assert!(included_in_locale(&item, &ctx("en", true)));
        assert!(included_in_locale(&item, &ctx("fr", false)));
    }

    #[test]
    fn test_item_with_allow_list_filters_by_membership() {
        let item = ContentItem {
            locales: Some(vec!["en".into(), "pt-BR".into()]),
            ..Default::default()
        };

        assert!(included_in_locale(&item, &ctx("en", true)));
        assert!(included_in_locale(&item, &ctx("pt-BR", false)));
        assert!(!included_in_locale(&item, &ctx("fr", false)));
    }

    #[test]
    fn test_empty_allow_list_excludes_everywhere() {
        let item = ContentItem {
            locales: Some(Vec::new()),
            ..Default::default()
        };
        assert!(!included_in_locale(&item, &ctx("en", true)));
    }

    // ------------------------------------------------------------------------
    // Directory scoping
    // ------------------------------------------------------------------------

    #[test]
    fn test_localized_family_reads_from_i18n_subdir() {
        let dir = localized_content_dir(Path::new("src"), "_posts", &ctx("fr", false), &[]);
        assert_eq!(
            dir,
            Path::new("src").join("_i18n").join("fr").join("_posts")
        );
    }

    #[test]
    fn test_excluded_family_keeps_default_dir() {
        let excludes = vec!["_posts".to_owned()];
        let dir = localized_content_dir(Path::new("src"), "_posts", &ctx("fr", false), &excludes);
        assert_eq!(dir, Path::new("src").join("_posts"));
    }

    // ------------------------------------------------------------------------
    // Category cleanup
    // ------------------------------------------------------------------------

    #[test]
    fn test_scrub_removes_subdirectory_artifacts() {
        let mut categories = vec![
            "_i18n".to_owned(),
            "fr".to_owned(),
            "travel".to_owned(),
            "food".to_owned(),
        ];
        scrub_categories(&mut categories, &ctx("fr", false));
        assert_eq!(categories, vec!["travel", "food"]);
    }

    #[test]
    fn test_scrub_keeps_other_locales_as_real_categories() {
        // Only the current pass's tag is synthetic
        let mut categories = vec!["en".to_owned(), "travel".to_owned()];
        scrub_categories(&mut categories, &ctx("fr", false));
        assert_eq!(categories, vec!["en", "travel"]);
    }

    #[test]
    fn test_scrub_dedups_preserving_first_occurrence() {
        let mut categories = vec![
            "travel".to_owned(),
            "food".to_owned(),
            "travel".to_owned(),
        ];
        scrub_categories(&mut categories, &ctx("en", true));
        assert_eq!(categories, vec!["travel", "food"]);
    }
}
