//! `[base]` section configuration.
//!
//! Basic site information shared by every locale pass.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in lingora.toml - site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// baseurl = "/blog"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used in build logs.
    #[serde(default)]
    pub title: String,

    /// Root base-URL prefix (without any appended locale code).
    ///
    /// Used verbatim when composing localized URLs: non-default locales
    /// link under `<baseurl>/<locale>/...`.
    #[serde(default = "defaults::base::baseurl")]
    #[educe(Default = defaults::base::baseurl())]
    pub baseurl: String,
}
