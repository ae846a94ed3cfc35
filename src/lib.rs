//! Lingora - a multi-locale build pipeline for static sites.
//!
//! Drives one full-site build per configured locale against a pluggable
//! [`SiteBuilder`], sharing templates and content while substituting
//! translated strings, translated permalinks, and locale-filtered content.
//!
//! # Architecture
//!
//! ```text
//! Localizer::build_site()
//!     │
//!     ├── pass per locale (default first)
//!     │       │
//!     │       ├── LocaleContext::derive() ──► immutable per-pass snapshot
//!     │       ├── SiteBuilder::build() ─────► render using the capability
//!     │       │                               surface + template operations
//!     │       └── output::relocate_default_output() (subfolder mode only)
//!     │
//!     └── translations loaded once, held for the store lifetime
//! ```
//!
//! The first locale in the configured list is the *default locale* and
//! renders at the site root; every other locale renders under `/<locale>/`.
//! The builder calls back into [`Localizer`] for content filtering, permalink
//! resolution, category cleanup, static-file pruning, and the template
//! operations (`translate_text`, `translate_url`, `resolve_include`).

pub mod build;
pub mod builder;
pub mod config;
pub mod content;
pub mod includes;
pub mod locale;
pub mod logger;
pub mod output;
pub mod permalink;
pub mod translations;

pub use build::Localizer;
pub use builder::SiteBuilder;
pub use config::SiteConfig;
pub use content::ContentItem;
pub use locale::{LocaleContext, LocaleTag};
pub use translations::{TranslationStore, TranslationValue};
