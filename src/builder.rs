//! The external site-builder contract.
//!
//! The rendering engine (template parsing, markdown/asset conversion, file
//! writing) lives outside this crate. The orchestrator drives it once per
//! locale through this trait; in exchange the builder is expected to call
//! the [`Localizer`](crate::build::Localizer) capability surface at its
//! extension points - content filtering during discovery, permalink
//! resolution, category population, static-file pruning before the copy
//! step, and the template operations during rendering.

use crate::build::Localizer;
use crate::content::ContentItem;
use crate::locale::LocaleContext;
use anyhow::Result;

/// A pluggable site builder, assumed non-reentrant: passes run strictly
/// sequentially, each against a context derived before the pass begins.
pub trait SiteBuilder {
    /// One full content-discovery + render + write pass for a locale.
    ///
    /// Any error aborts the whole multi-locale orchestration; there is no
    /// partial-locale recovery.
    fn build(&mut self, ctx: &LocaleContext, localizer: &Localizer<'_>) -> Result<()>;

    /// The builder's pages plus flattened collection documents.
    ///
    /// This is the inventory cross-locale link translation scans for
    /// namespace matches.
    fn content(&self) -> Vec<&ContentItem>;
}
