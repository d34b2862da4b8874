//! Type definitions classified by node kind.
//!
//! The parser represents `type Book` and `extend type Book` with the same
//! [`TypeDefinition`] shape and an `extend` flag. [`TypeNode`] pairs each
//! parsed definition with its [`NodeKind`] so binding can compare kinds
//! directly.

use async_graphql_parser::Positioned;
use async_graphql_parser::types::{
    BaseType, ConstDirective, EnumValueDefinition, FieldDefinition, InputValueDefinition, Type,
    TypeDefinition, TypeKind,
};
use async_graphql_parser::Pos;
use async_graphql_value::Name;
use skein_foundation::NodeKind;

/// One named type definition or extension from a schema document.
#[derive(Clone, Debug)]
pub struct TypeNode {
    kind: NodeKind,
    definition: Positioned<TypeDefinition>,
}

impl TypeNode {
    /// Classifies a parsed type definition.
    #[must_use]
    pub fn new(definition: Positioned<TypeDefinition>) -> Self {
        let base = match definition.node.kind {
            TypeKind::Scalar => NodeKind::ScalarDefinition,
            TypeKind::Object(_) => NodeKind::ObjectDefinition,
            TypeKind::Interface(_) => NodeKind::InterfaceDefinition,
            TypeKind::Union(_) => NodeKind::UnionDefinition,
            TypeKind::Enum(_) => NodeKind::EnumDefinition,
            TypeKind::InputObject(_) => NodeKind::InputObjectDefinition,
        };
        let kind = if definition.node.extend {
            base.extension()
        } else {
            base
        };
        Self { kind, definition }
    }

    /// Returns the node kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the type name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.definition.node.name.node.as_str()
    }

    /// Returns where the definition starts in its source text.
    #[must_use]
    pub const fn pos(&self) -> Pos {
        self.definition.pos
    }

    /// Returns the parsed definition.
    #[must_use]
    pub const fn definition(&self) -> &TypeDefinition {
        &self.definition.node
    }

    /// Returns true if this node is an `extend` form.
    #[must_use]
    pub const fn is_extension(&self) -> bool {
        self.kind.is_extension()
    }

    /// Returns the description string, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.definition
            .node
            .description
            .as_ref()
            .map(|d| d.node.as_str())
    }

    /// Returns the directives applied to the type itself.
    #[must_use]
    pub fn directives(&self) -> &[Positioned<ConstDirective>] {
        &self.definition.node.directives
    }

    /// Returns the output fields of an object or interface node.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        let fields: &[Positioned<FieldDefinition>] = match &self.definition.node.kind {
            TypeKind::Object(object) => &object.fields,
            TypeKind::Interface(interface) => &interface.fields,
            _ => &[],
        };
        fields.iter().map(|f| &f.node)
    }

    /// Returns the interfaces an object or interface node implements.
    pub fn interfaces(&self) -> impl Iterator<Item = &str> {
        let names: &[Positioned<Name>] = match &self.definition.node.kind {
            TypeKind::Object(object) => &object.implements,
            TypeKind::Interface(interface) => &interface.implements,
            _ => &[],
        };
        names.iter().map(|n| n.node.as_str())
    }

    /// Returns the member names of a union node.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        let names: &[Positioned<Name>] = match &self.definition.node.kind {
            TypeKind::Union(union) => &union.members,
            _ => &[],
        };
        names.iter().map(|n| n.node.as_str())
    }

    /// Returns the values of an enum node.
    pub fn enum_values(&self) -> impl Iterator<Item = &EnumValueDefinition> {
        let values: &[Positioned<EnumValueDefinition>] = match &self.definition.node.kind {
            TypeKind::Enum(enumeration) => &enumeration.values,
            _ => &[],
        };
        values.iter().map(|v| &v.node)
    }

    /// Returns the fields of an input object node.
    pub fn input_fields(&self) -> impl Iterator<Item = &InputValueDefinition> {
        let fields: &[Positioned<InputValueDefinition>] = match &self.definition.node.kind {
            TypeKind::InputObject(input) => &input.fields,
            _ => &[],
        };
        fields.iter().map(|f| &f.node)
    }
}

/// Returns the innermost named type, unwrapping list and non-null markers.
#[must_use]
pub fn named_type(ty: &Type) -> &str {
    match &ty.base {
        BaseType::Named(name) => name.as_str(),
        BaseType::List(inner) => named_type(inner),
    }
}

/// Finds a directive usage by name.
#[must_use]
pub fn find_directive<'a>(
    directives: &'a [Positioned<ConstDirective>],
    name: &str,
) -> Option<&'a ConstDirective> {
    directives
        .iter()
        .map(|d| &d.node)
        .find(|d| d.name.node.as_str() == name)
}
