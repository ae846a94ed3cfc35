//! `[build]` section configuration.
//!
//! Source and destination roots for the per-locale passes.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in lingora.toml - build paths.
///
/// # Example
/// ```toml
/// [build]
/// source = "."
/// output = "public"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Site source root. The `_i18n/` translation tree lives beneath it.
    #[serde(default = "defaults::build::source")]
    #[educe(Default = defaults::build::source())]
    pub source: PathBuf,

    /// Destination root. The default locale renders here; every other
    /// locale renders into `<output>/<locale>`.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,
}
