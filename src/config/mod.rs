//! Site configuration management for `lingora.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site metadata (title, root base-URL)             |
//! | `[build]`   | Source and destination roots                     |
//! | `[i18n]`    | Locale list, exclusions, localization flags      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! baseurl = "/blog"
//!
//! [build]
//! source = "."
//! output = "public"
//!
//! [i18n]
//! locales = ["en", "pt-BR"]
//! exclude_from_localizations = ["downloads/manual.pdf"]
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod i18n;

pub use error::ConfigError;
pub use i18n::I18nConfig;

use crate::locale::LocaleTag;
use base::BaseConfig;
use build::BuildConfig;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Directory under the source root holding translation documents
/// (`_i18n/<locale>.toml`) and per-locale content/include subtrees
/// (`_i18n/<locale>/...`).
pub const I18N_DIR: &str = "_i18n";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing lingora.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build paths
    #[serde(default)]
    pub build: BuildConfig,

    /// Localization settings
    #[serde(default)]
    pub i18n: I18nConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path.
    ///
    /// Relative `source`/`output` paths are anchored at the config file's
    /// directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;

        if let Some(root) = path.parent() {
            config.update_path_with_root(root);
        }
        Ok(config)
    }

    /// Directory holding per-locale translation documents and subtrees.
    pub fn i18n_dir(&self) -> PathBuf {
        self.build.source.join(I18N_DIR)
    }

    /// Anchor all relative paths at `root` and normalize to absolute paths
    pub fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.build.source = Self::normalize_path(&root.join(&self.build.source));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate the localization surface.
    ///
    /// A build without at least one valid locale has no meaningful output,
    /// so every failure here is fatal to the whole build.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i18n.locales.is_empty() {
            return Err(ConfigError::Validation(
                "you must provide at least one locale using the [i18n] `locales` setting".into(),
            ));
        }

        for tag in &self.i18n.locales {
            LocaleTag::parse(tag).map_err(|err| ConfigError::Validation(err.to_string()))?;
        }

        for path in &self.i18n.exclude_from_localizations {
            if Path::new(path).is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "[i18n] `exclude_from_localizations` entries must be relative paths, got `{path}`"
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
