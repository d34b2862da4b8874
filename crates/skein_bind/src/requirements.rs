//! The requirement ledger.
//!
//! A declaration lists the types it assumes exist elsewhere, each with the
//! definition kind it expects. Extensions must list their own base type;
//! everything else in the ledger documents intent and is checked only under
//! [`BindConfig::strict_requirements`](crate::BindConfig).

use std::collections::BTreeMap;

use skein_foundation::{Error, NodeKind, Result};

use crate::declaration::Declaration;

/// Ordered map from type name to the node kind it must have.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Requirements {
    entries: BTreeMap<String, NodeKind>,
}

impl Requirements {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous kind for the name.
    #[must_use]
    pub fn require(mut self, name: impl Into<String>, kind: NodeKind) -> Self {
        self.insert(name, kind);
        self
    }

    /// Adds an entry for another declaration, using its bound definition kind.
    ///
    /// # Errors
    /// Returns `InvalidDeclaration` if the other declaration is not bound yet.
    pub fn require_declaration(mut self, other: &Declaration) -> Result<Self> {
        let bound = other.bound().ok_or_else(|| {
            Error::invalid_declaration(other.name(), "must be bound before it can be required")
        })?;
        self.insert(other.name(), bound.kind().base());
        Ok(self)
    }

    /// Inserts an entry, returning the kind it replaced.
    pub fn insert(&mut self, name: impl Into<String>, kind: NodeKind) -> Option<NodeKind> {
        self.entries.insert(name.into(), kind)
    }

    /// Returns the kind required for a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeKind> {
        self.entries.get(name).copied()
    }

    /// Returns true if the ledger lists the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns every entry in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeKind)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, NodeKind)> for Requirements {
    fn from_iter<I: IntoIterator<Item = (S, NodeKind)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(n, k)| (n.into(), k)).collect(),
        }
    }
}
