//! Locale-specific include files.
//!
//! Whole-file translations live under `_i18n/<locale>/`. A template
//! requesting an include gets the target locale's variant when it exists,
//! and the default locale's otherwise; a file absent from both directories
//! fails that render call.

use crate::config::I18N_DIR;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Include resolution errors
#[derive(Debug, Error)]
pub enum IncludeError {
    #[error("included file `{file}` not found in `{locale_dir}` or `{default_dir}`")]
    NotFound {
        file: String,
        locale_dir: PathBuf,
        default_dir: PathBuf,
    },

    #[error("invalid include file name `{0}`")]
    InvalidName(String),
}

/// Resolve a localized include file by existence probe.
///
/// Probes `<source>/_i18n/<locale>/<file>`, then
/// `<source>/_i18n/<default_locale>/<file>`. Only regular files count;
/// symlinks are not eligible. Absolute names and parent-directory traversal
/// are rejected before touching the filesystem.
pub fn resolve_include(
    source: &Path,
    locale: &str,
    default_locale: &str,
    file: &str,
) -> Result<PathBuf, IncludeError> {
    validate_file_name(file)?;

    let locale_dir = source.join(I18N_DIR).join(locale);
    let default_dir = source.join(I18N_DIR).join(default_locale);

    for dir in [&locale_dir, &default_dir] {
        let candidate = dir.join(file);
        if is_regular_file(&candidate) {
            return Ok(candidate);
        }
    }

    Err(IncludeError::NotFound {
        file: file.to_owned(),
        locale_dir,
        default_dir,
    })
}

/// Reject names that could escape the include directories.
fn validate_file_name(file: &str) -> Result<(), IncludeError> {
    let path = Path::new(file);

    let escapes = file.is_empty()
        || path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));

    if escapes {
        return Err(IncludeError::InvalidName(file.to_owned()));
    }
    Ok(())
}

/// A plain file: exists and is not a symlink.
fn is_regular_file(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_file())
}

// ============================================================================
// Tests
// ============================================================================
