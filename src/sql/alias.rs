//! Table aliases - the scoping tokens column references are qualified with.

use std::fmt;
use std::sync::Arc;

/// An opaque token identifying one table occurrence in a query.
///
/// Qualification binds unqualified column references to an alias; the
/// expression layer only passes aliases around, the compiler renders
/// their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableAlias {
    name: Arc<str>,
}

impl TableAlias {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// The name emitted in front of qualified columns.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TableAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for TableAlias {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
