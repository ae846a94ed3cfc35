//! Translation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Translation-related errors.
///
/// `Read`/`Parse` are fatal when they hit the default locale's document and
/// degrade to fallback otherwise. `Access` means the dotted key walked into
/// a structurally incompatible container, which indicates a malformed
/// translation document; it surfaces to the caller instead of being
/// swallowed as a plain miss.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("failed to read translation document `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to parse translation document `{0}`")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("translation key `{key}`: segment `{segment}` cannot index into a {container}")]
    Access {
        key: String,
        segment: String,
        container: &'static str,
    },
}

impl TranslationError {
    /// Whether this is a document-load failure (as opposed to a lookup
    /// failure inside an already-loaded table).
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Read(..) | Self::Parse(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_classification() {
        let read = TranslationError::Read(
            PathBuf::from("_i18n/fr.toml"),
            Error::new(ErrorKind::NotFound, "missing"),
        );
        assert!(read.is_load());

        let access = TranslationError::Access {
            key: "a.b".into(),
            segment: "b".into(),
            container: "scalar",
        };
        assert!(!access.is_load());
        assert!(format!("{access}").contains("a.b"));
    }
}
