//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn baseurl() -> String {
        "".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn source() -> PathBuf {
        ".".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }
}

// ============================================================================
// [i18n] Section Defaults
// ============================================================================

pub mod i18n {
    pub fn locales() -> Vec<String> {
        Vec::new()
    }

    pub fn exclude_from_localizations() -> Vec<String> {
        Vec::new()
    }
}
