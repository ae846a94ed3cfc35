//! Permalink resolution and cross-locale URL translation.
//!
//! Permalinks resolve per pass: a locale-specific override
//! (`permalink_<locale>` in the builder's front-matter, surfaced as
//! `permalink_overrides`) beats the default permalink unless
//! relative-permalink mode is on. Cross-locale links go through a
//! *namespace*: templates name the logical page once and get the right URL
//! for any locale from a single indirection point.

use crate::content::ContentItem;
use crate::locale::LocaleContext;

/// Compute an item's effective permalink for the current pass.
///
/// Returns `None` when the item defines no default permalink. In
/// relative-permalink mode the item's directory joins the default permalink
/// (locale-independent). Otherwise the current locale's override wins over
/// the default; with no current locale the default applies as-is.
pub fn effective_permalink(
    item: &ContentItem,
    ctx: Option<&LocaleContext>,
    relative_permalinks: bool,
) -> Option<String> {
    let permalink = item.permalink.as_deref()?;

    if relative_permalinks {
        let dir = item.dir.to_string_lossy();
        return Some(join_url(&dir, permalink));
    }

    match ctx {
        Some(ctx) => Some(
            item.permalink_overrides
                .get(ctx.tag.as_str())
                .map_or(permalink, String::as_str)
                .to_owned(),
        ),
        None => Some(permalink.to_owned()),
    }
}

/// Template operation: fully-qualified link to the content item carrying a
/// namespace, in a chosen locale.
///
/// The effective locale is the explicit target, or the current pass's
/// locale. The base-URL gains `/<locale>` unless `strip_locale` is set, or
/// no target was requested while the current locale is the default. The
/// matching item's override for the effective locale (falling back to its
/// default permalink) is appended verbatim; the last namespace match wins.
/// No match yields an empty string, not an error, so templates may
/// speculatively probe optional cross-links.
pub fn translate_url<'a, I>(
    items: I,
    namespace: &str,
    target_locale: Option<&str>,
    strip_locale: bool,
    ctx: &LocaleContext,
) -> String
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let locale = target_locale.unwrap_or(ctx.tag.as_str());

    let mut baseurl = ctx.baseurl_root.clone();
    if (target_locale.is_some() && !strip_locale) || (target_locale.is_none() && !ctx.is_default) {
        baseurl = format!("{baseurl}/{locale}");
    }

    let mut url = String::new();
    for item in items {
        if item.namespace.as_deref() != Some(namespace) {
            continue;
        }
        // An item with no permalink at all cannot be linked to
        let Some(permalink) = item
            .permalink_overrides
            .get(locale)
            .or(item.permalink.as_ref())
        else {
            continue;
        };
        url = format!("{baseurl}{permalink}");
    }
    url
}

/// Parse the whitespace-separated argument form of the `translate_link`
/// template operation: `namespace [locale] [strip]`.
///
/// Returns `None` when no namespace is present. Any third token other than
/// the literal `false` enables locale stripping.
pub fn parse_link_args(raw: &str) -> Option<(&str, Option<&str>, bool)> {
    let mut parts = raw.split_whitespace();
    let namespace = parts.next()?;
    let locale = parts.next();
    let strip = parts.next().is_some_and(|s| s != "false");
    Some((namespace, locale, strip))
}

/// The root base-URL with a trailing slash removed, for templates composing
/// locale-stripped canonical links.
pub fn sanitized_baseurl(ctx: &LocaleContext) -> &str {
    ctx.baseurl_root
        .strip_suffix('/')
        .unwrap_or(&ctx.baseurl_root)
}

/// Join a directory and a permalink with exactly one separating slash.
fn join_url(dir: &str, tail: &str) -> String {
    let dir = dir.strip_suffix('/').unwrap_or(dir);
    let tail = tail.strip_prefix('/').unwrap_or(tail);
    format!("{dir}/{tail}")
}

// ============================================================================
// Tests
// ============================================================================
