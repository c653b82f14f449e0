//! Dotted field paths used to point at the offending part of a payload.

use std::fmt;

/// A dotted path such as `auth.accessIdentifiers[0].grantedEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    rendered: String,
    leaf: &'static str,
}

impl FieldPath {
    /// Path to a top-level payload key.
    #[must_use]
    pub fn root(key: &'static str) -> Self {
        Self {
            rendered: key.to_owned(),
            leaf: key,
        }
    }

    /// Path to `key` inside the object at this path.
    #[must_use]
    pub fn key(&self, key: &'static str) -> Self {
        Self {
            rendered: format!("{}.{key}", self.rendered),
            leaf: key,
        }
    }

    /// Path to element `index` of the list at this path.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self {
            rendered: format!("{}[{index}]", self.rendered),
            leaf: self.leaf,
        }
    }

    /// The last object key on the path (list indices are skipped).
    #[must_use]
    pub const fn leaf(&self) -> &'static str {
        self.leaf
    }

    /// The rendered path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.rendered)
    }
}
