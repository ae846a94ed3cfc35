//! Locale tags and per-pass locale contexts.
//!
//! A [`LocaleTag`] is a parsed `language[-territory]` identifier. A
//! [`LocaleContext`] is the immutable snapshot of everything a single build
//! pass needs to know about its locale: derived base-URL, derived output
//! directory, and the pre-derivation roots. The orchestrator constructs one
//! context per pass and threads it into every filter, resolver, and builder
//! call for that pass; nothing reads locale state from shared configuration.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Locale-related errors
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("invalid locale tag `{0}`: expected `language[-territory]`")]
    InvalidTag(String),
}

// ============================================================================
// LocaleTag
// ============================================================================

/// A parsed `language[-territory]` locale identifier (e.g. `en`, `pt-BR`).
///
/// Immutable once parsed. Segments past the territory are ignored, matching
/// the tag-splitting rule of the permalink/URL scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    tag: String,
    language: String,
    territory: Option<String>,
}

impl LocaleTag {
    /// Parse a locale tag. Fails on an empty tag or an empty segment.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let mut parts = tag.split('-');

        let language = match parts.next() {
            Some(lang) if !lang.is_empty() => lang.to_owned(),
            _ => return Err(LocaleError::InvalidTag(tag.to_owned())),
        };
        let territory = match parts.next() {
            Some("") => return Err(LocaleError::InvalidTag(tag.to_owned())),
            territory => territory.map(str::to_owned),
        };

        Ok(Self {
            tag: tag.to_owned(),
            language,
            territory,
        })
    }

    /// The full tag as configured (`pt-BR`).
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The language part (`pt` for `pt-BR`).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The territory part (`BR` for `pt-BR`), if any.
    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    /// Underscore-joined variant for filesystem/display use (`pt_BR`).
    pub fn underscored(&self) -> String {
        self.tag.replacen('-', "_", 1)
    }
}

impl std::fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tag)
    }
}

// ============================================================================
// LocaleContext
// ============================================================================

/// Immutable locale-derived configuration for one build pass.
///
/// Derived once by the orchestrator before the pass starts and passed down
/// explicitly; repeated builds derive fresh contexts from the same roots, so
/// no teardown/restore step exists.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    /// The pass's locale.
    pub tag: LocaleTag,

    /// Whether this pass renders the default locale.
    pub is_default: bool,

    /// Root base-URL, without any appended locale code.
    pub baseurl_root: String,

    /// Destination root, shared by all passes.
    pub dest_root: PathBuf,

    /// Effective base-URL for this pass.
    pub baseurl: String,

    /// Effective output directory for this pass.
    pub dest: PathBuf,
}

impl LocaleContext {
    /// Derive the context for one locale pass.
    ///
    /// The default locale renders at `dest_root` under `baseurl_root`,
    /// unless `subfolder_forced` pushes it into `dest_root/<tag>` like every
    /// non-default locale. Non-default locales also get `/<tag>` appended to
    /// their base-URL.
    pub fn derive(
        tag: &str,
        is_default: bool,
        baseurl_root: &str,
        dest_root: &Path,
        subfolder_forced: bool,
    ) -> Result<Self, LocaleError> {
        let tag = LocaleTag::parse(tag)?;

        let dest = if is_default && !subfolder_forced {
            dest_root.to_path_buf()
        } else {
            dest_root.join(tag.as_str())
        };
        let baseurl = if is_default {
            baseurl_root.to_owned()
        } else {
            format!("{}/{}", baseurl_root, tag.as_str())
        };

        Ok(Self {
            tag,
            is_default,
            baseurl_root: baseurl_root.to_owned(),
            dest_root: dest_root.to_path_buf(),
            baseurl,
            dest,
        })
    }

    /// This pass's output subfolder under the destination root, when it has
    /// one (`None` for a default pass rendering at the root).
    pub fn subfolder(&self) -> Option<PathBuf> {
        (self.dest != self.dest_root).then(|| self.dest.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // LocaleTag
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_language_only() {
        let tag = LocaleTag::parse("en").unwrap();
        assert_eq!(tag.as_str(), "en");
        assert_eq!(tag.language(), "en");
        assert_eq!(tag.territory(), None);
        assert_eq!(tag.underscored(), "en");
    }

    #[test]
    fn test_parse_language_and_territory() {
        let tag = LocaleTag::parse("pt-BR").unwrap();
        assert_eq!(tag.language(), "pt");
        assert_eq!(tag.territory(), Some("BR"));
        assert_eq!(tag.underscored(), "pt_BR");
    }

    #[test]
    fn test_parse_extra_segments_ignored() {
        let tag = LocaleTag::parse("zh-Hans-CN").unwrap();
        assert_eq!(tag.language(), "zh");
        assert_eq!(tag.territory(), Some("Hans"));
        // Only the first separator turns into an underscore
        assert_eq!(tag.underscored(), "zh_Hans-CN");
    }

    #[test]
    fn test_parse_empty_tag_fails() {
        assert!(LocaleTag::parse("").is_err());
    }

    #[test]
    fn test_parse_empty_segment_fails() {
        assert!(LocaleTag::parse("pt-").is_err());
        assert!(LocaleTag::parse("-BR").is_err());
    }

    // ------------------------------------------------------------------------
    // LocaleContext
    // ------------------------------------------------------------------------

    #[test]
    fn test_derive_default_locale_at_root() {
        let ctx = LocaleContext::derive("en", true, "/site", Path::new("public"), false).unwrap();

        assert!(ctx.is_default);
        assert_eq!(ctx.baseurl, "/site");
        assert_eq!(ctx.dest, PathBuf::from("public"));
        assert_eq!(ctx.subfolder(), None);
    }

    #[test]
    fn test_derive_default_locale_subfolder_forced() {
        let ctx = LocaleContext::derive("en", true, "/site", Path::new("public"), true).unwrap();

        // Output moves into the subfolder; the base-URL does not change
        assert_eq!(ctx.baseurl, "/site");
        assert_eq!(ctx.dest, PathBuf::from("public").join("en"));
        assert_eq!(ctx.subfolder(), Some(PathBuf::from("public").join("en")));
    }

    #[test]
    fn test_derive_non_default_locale() {
        let ctx = LocaleContext::derive("pt-BR", false, "/site", Path::new("public"), false)
            .unwrap();

        assert!(!ctx.is_default);
        assert_eq!(ctx.baseurl, "/site/pt-BR");
        assert_eq!(ctx.dest, PathBuf::from("public").join("pt-BR"));
        assert_eq!(ctx.baseurl_root, "/site");
        assert_eq!(ctx.dest_root, PathBuf::from("public"));
    }

    #[test]
    fn test_derive_invalid_tag_fails() {
        assert!(LocaleContext::derive("", true, "", Path::new("public"), false).is_err());
    }
}
