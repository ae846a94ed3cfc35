//! Output partitioning between the site root and locale subfolders.
//!
//! Two concerns, both driven by the exclusion path list:
//!
//! - after the default pass, when the default locale builds into its own
//!   subfolder, the root-only files move out of it to the site root;
//! - on every non-default pass, locale-invariant files are pruned from the
//!   static-file set before the builder copies it, so they exist exactly
//!   once at the root instead of once per locale subfolder.

use crate::config::I18nConfig;
use crate::locale::LocaleContext;
use crate::log;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Root-only designated output file, renamed to the root index during
/// relocation.
pub const BASE_FILE: &str = "base.html";

/// Root index file name.
pub const INDEX_FILE: &str = "index.html";

/// Access-control file kept at the site root, never copied into locale
/// subfolders.
pub const ACCESS_CONTROL_FILE: &str = ".htaccess";

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

// ============================================================================
// Post-write relocation (default locale in subfolder)
// ============================================================================

/// Move the root-only files out of the default locale's output subfolder.
///
/// `base.html` becomes the root `index.html`; every exclusion entry present
/// under the subfolder moves to the corresponding root path. A pre-existing
/// destination is removed first (destructive overwrite is the policy, not a
/// skip). Everything else stays in the subfolder.
pub fn relocate_default_output(ctx: &LocaleContext, excludes: &[String]) -> Result<()> {
    let Some(subdir) = ctx.subfolder() else {
        return Ok(());
    };

    let base = subdir.join(BASE_FILE);
    if base.is_file() {
        move_replacing(&base, &ctx.dest_root.join(INDEX_FILE))?;
    }

    for exclude in excludes {
        let src = subdir.join(exclude);
        if src.exists() {
            move_replacing(&src, &ctx.dest_root.join(exclude))?;
        }
    }

    Ok(())
}

/// Remove-then-rename a file or tree into place.
fn move_replacing(src: &Path, dest: &Path) -> Result<()> {
    log!("i18n"; "moving `{}` to `{}`", src.display(), dest.display());

    if dest.is_dir() {
        fs::remove_dir_all(dest)
            .with_context(|| format!("Failed to clear `{}`", dest.display()))?;
    } else if dest.exists() {
        fs::remove_file(dest)
            .with_context(|| format!("Failed to clear `{}`", dest.display()))?;
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::rename(src, dest)
        .with_context(|| format!("Failed to move `{}` to `{}`", src.display(), dest.display()))
}

// ============================================================================
// Post-render pruning (non-default passes)
// ============================================================================

/// Whether a static file belongs in the current pass's output.
///
/// The default pass keeps everything. Non-default passes drop the
/// access-control file, `base.html` when the default locale builds into a
/// subfolder, and anything descending from an exclusion entry
/// (component-wise prefix match, not string equality).
pub fn keep_static_file(rel: &Path, ctx: &LocaleContext, i18n: &I18nConfig) -> bool {
    if ctx.is_default {
        return true;
    }

    let rel = rel.strip_prefix("/").unwrap_or(rel);

    if rel.file_name() == Some(OsStr::new(BASE_FILE)) && i18n.default_locale_in_subfolder {
        return false;
    }
    if rel == Path::new(ACCESS_CONTROL_FILE) {
        return false;
    }

    !i18n
        .exclude_from_localizations
        .iter()
        .any(|exclude| rel.starts_with(exclude))
}

/// Bulk form of [`keep_static_file`] over a builder's static-file set.
pub fn retain_localized(files: &mut Vec<PathBuf>, ctx: &LocaleContext, i18n: &I18nConfig) {
    files.retain(|rel| keep_static_file(rel, ctx, i18n));
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Collect all files from a directory recursively.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
