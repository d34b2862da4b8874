//! Schema type-node kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a named type node in a schema document.
///
/// Every named type appears in a document either as a definition
/// (`union U = A | B`) or as an extension of a definition declared
/// elsewhere (`extend union U = C`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// `type Name { ... }`
    ObjectDefinition,
    /// `extend type Name { ... }`
    ObjectExtension,
    /// `interface Name { ... }`
    InterfaceDefinition,
    /// `extend interface Name { ... }`
    InterfaceExtension,
    /// `union Name = A | B`
    UnionDefinition,
    /// `extend union Name = C`
    UnionExtension,
    /// `enum Name { ... }`
    EnumDefinition,
    /// `extend enum Name { ... }`
    EnumExtension,
    /// `scalar Name`
    ScalarDefinition,
    /// `extend scalar Name`
    ScalarExtension,
    /// `input Name { ... }`
    InputObjectDefinition,
    /// `extend input Name { ... }`
    InputObjectExtension,
}

impl NodeKind {
    /// Every node kind, definitions first within each pair.
    pub const ALL: [NodeKind; 12] = [
        Self::ObjectDefinition,
        Self::ObjectExtension,
        Self::InterfaceDefinition,
        Self::InterfaceExtension,
        Self::UnionDefinition,
        Self::UnionExtension,
        Self::EnumDefinition,
        Self::EnumExtension,
        Self::ScalarDefinition,
        Self::ScalarExtension,
        Self::InputObjectDefinition,
        Self::InputObjectExtension,
    ];

    /// Returns true for `extend ...` kinds.
    #[must_use]
    pub const fn is_extension(self) -> bool {
        matches!(
            self,
            Self::ObjectExtension
                | Self::InterfaceExtension
                | Self::UnionExtension
                | Self::EnumExtension
                | Self::ScalarExtension
                | Self::InputObjectExtension
        )
    }

    /// Returns the definition kind this kind belongs to.
    ///
    /// Definitions map to themselves.
    #[must_use]
    pub const fn base(self) -> Self {
        match self {
            Self::ObjectDefinition | Self::ObjectExtension => Self::ObjectDefinition,
            Self::InterfaceDefinition | Self::InterfaceExtension => Self::InterfaceDefinition,
            Self::UnionDefinition | Self::UnionExtension => Self::UnionDefinition,
            Self::EnumDefinition | Self::EnumExtension => Self::EnumDefinition,
            Self::ScalarDefinition | Self::ScalarExtension => Self::ScalarDefinition,
            Self::InputObjectDefinition | Self::InputObjectExtension => {
                Self::InputObjectDefinition
            }
        }
    }

    /// Returns the extension kind this kind belongs to.
    ///
    /// Extensions map to themselves.
    #[must_use]
    pub const fn extension(self) -> Self {
        match self {
            Self::ObjectDefinition | Self::ObjectExtension => Self::ObjectExtension,
            Self::InterfaceDefinition | Self::InterfaceExtension => Self::InterfaceExtension,
            Self::UnionDefinition | Self::UnionExtension => Self::UnionExtension,
            Self::EnumDefinition | Self::EnumExtension => Self::EnumExtension,
            Self::ScalarDefinition | Self::ScalarExtension => Self::ScalarExtension,
            Self::InputObjectDefinition | Self::InputObjectExtension => {
                Self::InputObjectExtension
            }
        }
    }

    /// Returns the SDL keyword for this kind without the `extend` prefix.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self.base() {
            Self::ObjectDefinition => "type",
            Self::InterfaceDefinition => "interface",
            Self::UnionDefinition => "union",
            Self::EnumDefinition => "enum",
            Self::ScalarDefinition => "scalar",
            _ => "input",
        }
    }

    /// Returns true if values of this kind can be returned from a field.
    #[must_use]
    pub const fn is_output(self) -> bool {
        !matches!(self.base(), Self::InputObjectDefinition)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_extension() {
            write!(f, "extend {}", self.keyword())
        } else {
            write!(f, "{}", self.keyword())
        }
    }
}
