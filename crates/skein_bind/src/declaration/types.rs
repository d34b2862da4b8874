//! Declaration type definitions.
//!
//! Contains the declaration categories, the executable behavior each
//! category carries, and the bound node a declaration is fixed to.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use skein_foundation::{NodeKind, Value};
use skein_schema::{FieldResolver, LiteralParser, ScalarFn, TypeResolver};
use skein_sdl::{SchemaDocument, TypeNode};

// =============================================================================
// Category
// =============================================================================

/// The closed set of declaration categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Binds to `type` / `extend type`.
    Object,
    /// Binds to `interface` / `extend interface`.
    Interface,
    /// Binds to `union` / `extend union`.
    Union,
    /// Binds to `enum` / `extend enum`.
    Enum,
    /// Binds to `scalar` / `extend scalar`.
    Scalar,
}

impl Category {
    /// Returns the definition kind of this category.
    #[must_use]
    pub const fn definition_kind(self) -> NodeKind {
        match self {
            Self::Object => NodeKind::ObjectDefinition,
            Self::Interface => NodeKind::InterfaceDefinition,
            Self::Union => NodeKind::UnionDefinition,
            Self::Enum => NodeKind::EnumDefinition,
            Self::Scalar => NodeKind::ScalarDefinition,
        }
    }

    /// Returns the node kinds a declaration of this category may bind to.
    #[must_use]
    pub const fn expected_kinds(self) -> [NodeKind; 2] {
        let definition = self.definition_kind();
        [definition, definition.extension()]
    }

    /// Returns true if a node of the given kind can be bound.
    #[must_use]
    pub fn accepts(self, kind: NodeKind) -> bool {
        kind.base() == self.definition_kind()
    }

    /// Returns the category whose nodes have the given kind.
    ///
    /// Input objects carry no executable behavior and have no category.
    #[must_use]
    pub const fn of(kind: NodeKind) -> Option<Self> {
        match kind.base() {
            NodeKind::ObjectDefinition => Some(Self::Object),
            NodeKind::InterfaceDefinition => Some(Self::Interface),
            NodeKind::UnionDefinition => Some(Self::Union),
            NodeKind::EnumDefinition => Some(Self::Enum),
            NodeKind::ScalarDefinition => Some(Self::Scalar),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Scalar => "scalar",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// Behavior
// =============================================================================

/// Field resolvers for an object type.
#[derive(Clone, Debug, Default)]
pub struct ObjectBehavior {
    /// Resolver per field name.
    pub fields: BTreeMap<String, FieldResolver>,
}

/// Field resolvers and discriminator for an interface type.
#[derive(Clone, Debug, Default)]
pub struct InterfaceBehavior {
    /// Resolver per field name.
    pub fields: BTreeMap<String, FieldResolver>,
    /// Maps a value to its concrete object type name.
    pub resolve_type: Option<TypeResolver>,
}

/// Discriminator for a union type.
#[derive(Clone, Debug, Default)]
pub struct UnionBehavior {
    /// Maps a value to its concrete object type name.
    pub resolve_type: Option<TypeResolver>,
}

/// Runtime values for enum value names.
#[derive(Clone, Debug, Default)]
pub struct EnumBehavior {
    /// Runtime value per enum value name.
    pub values: BTreeMap<String, Value>,
}

/// Conversion functions for a scalar type.
#[derive(Clone, Debug, Default)]
pub struct ScalarBehavior {
    /// Converts a runtime value to its output form.
    pub serialize: Option<ScalarFn>,
    /// Converts an input variable value to a runtime value.
    pub parse_value: Option<ScalarFn>,
    /// Converts an inline literal to a runtime value.
    pub parse_literal: Option<LiteralParser>,
}

/// The executable behavior a declaration attaches, one variant per category.
#[derive(Clone, Debug)]
pub enum Behavior {
    /// Object field resolvers.
    Object(ObjectBehavior),
    /// Interface field resolvers and discriminator.
    Interface(InterfaceBehavior),
    /// Union discriminator.
    Union(UnionBehavior),
    /// Enum value mapping.
    Enum(EnumBehavior),
    /// Scalar conversions.
    Scalar(ScalarBehavior),
}

impl Behavior {
    /// Creates an empty behavior for a category.
    #[must_use]
    pub fn empty(category: Category) -> Self {
        match category {
            Category::Object => Self::Object(ObjectBehavior::default()),
            Category::Interface => Self::Interface(InterfaceBehavior::default()),
            Category::Union => Self::Union(UnionBehavior::default()),
            Category::Enum => Self::Enum(EnumBehavior::default()),
            Category::Scalar => Self::Scalar(ScalarBehavior::default()),
        }
    }

    /// Returns the category this behavior belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Object(_) => Category::Object,
            Self::Interface(_) => Category::Interface,
            Self::Union(_) => Category::Union,
            Self::Enum(_) => Category::Enum,
            Self::Scalar(_) => Category::Scalar,
        }
    }

    /// Returns the field resolvers of an object or interface behavior.
    #[must_use]
    pub fn field_resolvers(&self) -> Option<&BTreeMap<String, FieldResolver>> {
        match self {
            Self::Object(b) => Some(&b.fields),
            Self::Interface(b) => Some(&b.fields),
            _ => None,
        }
    }

    /// Returns the discriminator of a union or interface behavior.
    #[must_use]
    pub const fn type_resolver(&self) -> Option<&TypeResolver> {
        match self {
            Self::Union(UnionBehavior { resolve_type })
            | Self::Interface(InterfaceBehavior { resolve_type, .. }) => resolve_type.as_ref(),
            _ => None,
        }
    }
}

// =============================================================================
// Bound node
// =============================================================================

/// Where a bound node was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeSource {
    /// The declaration's own inline fragment.
    Fragment,
    /// The shared schema document.
    Document,
}

/// The schema node a declaration is fixed to.
#[derive(Clone, Debug)]
pub struct BoundNode {
    /// The located node.
    pub node: TypeNode,
    /// Where it was located.
    pub source: NodeSource,
    /// The declaration's parsed inline fragment, if it has one.
    ///
    /// Every type node in it is added to the assembled schema.
    pub fragment: Option<Arc<SchemaDocument>>,
}

impl BoundNode {
    /// Returns the node's type name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.node.name()
    }

    /// Returns the node's kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    /// Returns true if the node is an extension.
    #[must_use]
    pub const fn is_extension(&self) -> bool {
        self.node.kind().is_extension()
    }
}
