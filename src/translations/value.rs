//! The translation table value tree and dotted-path resolution.
//!
//! A translation document parses into a [`TranslationValue`]: a tagged tree
//! of scalars, sequences, and mappings. Dotted lookup paths walk the tree
//! segment by segment; each segment is tried as a sequence index when it is
//! the canonical decimal form of an integer, and as a mapping key otherwise.

use super::TranslationError;
use std::collections::BTreeMap;

/// A node in a per-locale translation table.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationValue {
    /// Leaf text. Numbers, booleans, and datetimes render to their string
    /// form on load.
    Scalar(String),
    /// Ordered list, indexed by canonical decimal segments.
    Sequence(Vec<TranslationValue>),
    /// Nested table, keyed by string segments.
    Mapping(BTreeMap<String, TranslationValue>),
}

impl TranslationValue {
    /// Walk a dotted key path into the tree.
    ///
    /// Returns `Ok(None)` as soon as any segment fails to resolve (missing
    /// key, out-of-range index). A segment applied to a structurally
    /// incompatible container is an [`TranslationError::Access`]: descending
    /// into a scalar, or a non-integer segment against a sequence.
    pub fn resolve(&self, key: &str) -> Result<Option<&TranslationValue>, TranslationError> {
        let mut current = self;

        for segment in key.split('.') {
            current = match current {
                Self::Mapping(map) => match map.get(segment) {
                    Some(value) => value,
                    None => return Ok(None),
                },
                Self::Sequence(seq) => match canonical_index(segment) {
                    Some(index) => match seq.get(index) {
                        Some(value) => value,
                        None => return Ok(None),
                    },
                    None => {
                        return Err(TranslationError::Access {
                            key: key.to_owned(),
                            segment: segment.to_owned(),
                            container: "sequence",
                        });
                    }
                },
                Self::Scalar(_) => {
                    return Err(TranslationError::Access {
                        key: key.to_owned(),
                        segment: segment.to_owned(),
                        container: "scalar",
                    });
                }
            };
        }

        Ok(Some(current))
    }

    /// Leaf text, for scalar nodes.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// An empty scalar, sequence, or mapping. Empty values trigger locale
    /// fallback exactly like absent ones.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(text) => text.is_empty(),
            Self::Sequence(seq) => seq.is_empty(),
            Self::Mapping(map) => map.is_empty(),
        }
    }
}

impl From<toml::Value> for TranslationValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(text) => Self::Scalar(text),
            toml::Value::Integer(n) => Self::Scalar(n.to_string()),
            toml::Value::Float(n) => Self::Scalar(n.to_string()),
            toml::Value::Boolean(b) => Self::Scalar(b.to_string()),
            toml::Value::Datetime(dt) => Self::Scalar(dt.to_string()),
            toml::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            toml::Value::Table(table) => Self::Mapping(
                table
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Parse a segment as a sequence index, accepting only the canonical decimal
/// representation (`"2"` yes, `"02"`/`"+2"`/`"-2"` no).
fn canonical_index(segment: &str) -> Option<usize> {
    let index: usize = segment.parse().ok()?;
    (index.to_string() == segment).then_some(index)
}

// ============================================================================
// Tests
// ============================================================================
