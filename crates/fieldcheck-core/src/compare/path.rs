//! Dotted, array-indexed field paths (`shareholders[0].address.city`).

use serde::Serialize;
use std::fmt;

/// Location of a field relative to the candidate's root
///
/// Paths are immutable; descending produces a new path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// The empty path of the document root
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Path from an existing prefix string (empty string is the root)
    pub fn from_prefix(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    /// Descend into an object key
    pub fn child(&self, key: &str) -> Self {
        if self.is_root() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Descend into an array index
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
