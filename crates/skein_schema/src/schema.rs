//! The live schema type registry.
//!
//! A [`Schema`] maps type names to [`SchemaType`] entries. Entries are
//! created by [`build_schema`](crate::build_schema) and afterwards only
//! mutated in place: resolvers, discriminators, scalar functions and enum
//! values are written onto existing entries, never replacing them.

use std::collections::BTreeMap;

use skein_foundation::{NodeKind, Value};
use skein_sdl::ast::Type;
use skein_sdl::named_type;

use crate::resolver::{FieldResolver, LiteralParser, ScalarFn, TypeResolver};
use crate::scalars;

/// An output field of an object or interface type.
#[derive(Clone, Debug)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Return type.
    pub ty: Type,
    /// Argument definitions.
    pub arguments: Vec<InputValue>,
    /// Deprecation reason, if the field is deprecated.
    pub deprecation: Option<String>,
    /// Resolver, once attached or defaulted.
    pub resolver: Option<FieldResolver>,
}

impl Field {
    /// Creates a field with no arguments and no resolver.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            arguments: Vec::new(),
            deprecation: None,
            resolver: None,
        }
    }

    /// Returns an argument definition by name.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&InputValue> {
        self.arguments.iter().find(|a| a.name == name)
    }
}

/// An argument or input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    /// Value name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Input type.
    pub ty: Type,
    /// Default value, if any.
    pub default_value: Option<Value>,
}

/// An object type entry.
#[derive(Clone, Debug)]
pub struct ObjectType {
    /// Type name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Implemented interfaces.
    pub interfaces: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

/// An interface type entry.
#[derive(Clone, Debug)]
pub struct InterfaceType {
    /// Type name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Implemented interfaces.
    pub interfaces: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Discriminator, once attached.
    pub resolve_type: Option<TypeResolver>,
}

/// A union type entry.
#[derive(Clone, Debug)]
pub struct UnionType {
    /// Type name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Member object type names.
    pub members: Vec<String>,
    /// Discriminator, once attached.
    pub resolve_type: Option<TypeResolver>,
}

/// One value of an enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    /// Value name as written in the schema.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Deprecation reason, if deprecated.
    pub deprecation: Option<String>,
    /// Runtime value this name maps to. Defaults to `Value::Enum(name)`.
    pub value: Value,
}

/// An enum type entry.
#[derive(Clone, Debug)]
pub struct EnumType {
    /// Type name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

impl EnumType {
    /// Returns a value by its schema name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Returns a value by its schema name, mutably.
    pub fn value_mut(&mut self, name: &str) -> Option<&mut EnumValue> {
        self.values.iter_mut().find(|v| v.name == name)
    }
}

/// A scalar type entry.
#[derive(Clone, Debug)]
pub struct ScalarType {
    /// Type name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// URL from `@specifiedBy`, if any.
    pub specified_by: Option<String>,
    /// Converts a runtime value into its output form.
    pub serialize: Option<ScalarFn>,
    /// Converts an input variable value into a runtime value.
    pub parse_value: Option<ScalarFn>,
    /// Converts an inline literal into a runtime value.
    pub parse_literal: Option<LiteralParser>,
}

impl ScalarType {
    /// Creates a custom scalar with no functions set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
        }
    }

    /// Creates a built-in scalar with its standard coercion functions.
    #[must_use]
    pub fn builtin(name: &str) -> Self {
        let coerce = scalars::coercion(name);
        Self {
            name: name.to_string(),
            description: None,
            specified_by: None,
            serialize: coerce.clone(),
            parse_value: coerce,
            parse_literal: None,
        }
    }
}

/// An input object type entry.
#[derive(Clone, Debug)]
pub struct InputObjectType {
    /// Type name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Input fields in declaration order.
    pub fields: Vec<InputValue>,
}

/// One entry of the live type registry.
#[derive(Clone, Debug)]
pub enum SchemaType {
    /// `type`
    Object(ObjectType),
    /// `interface`
    Interface(InterfaceType),
    /// `union`
    Union(UnionType),
    /// `enum`
    Enum(EnumType),
    /// `scalar`
    Scalar(ScalarType),
    /// `input`
    InputObject(InputObjectType),
}

impl SchemaType {
    /// Returns the type name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Object(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::Scalar(t) => &t.name,
            Self::InputObject(t) => &t.name,
        }
    }

    /// Returns the definition kind this entry was built from.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Object(_) => NodeKind::ObjectDefinition,
            Self::Interface(_) => NodeKind::InterfaceDefinition,
            Self::Union(_) => NodeKind::UnionDefinition,
            Self::Enum(_) => NodeKind::EnumDefinition,
            Self::Scalar(_) => NodeKind::ScalarDefinition,
            Self::InputObject(_) => NodeKind::InputObjectDefinition,
        }
    }

    /// Returns the output fields of an object or interface.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        match self {
            Self::Object(t) => &t.fields,
            Self::Interface(t) => &t.fields,
            _ => &[],
        }
    }

    /// Returns the output fields of an object or interface, mutably.
    pub fn fields_mut(&mut self) -> &mut [Field] {
        match self {
            Self::Object(t) => &mut t.fields,
            Self::Interface(t) => &mut t.fields,
            _ => &mut [],
        }
    }

    /// Returns an output field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Returns an output field by name, mutably.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields_mut().iter_mut().find(|f| f.name == name)
    }

    /// Returns the discriminator of a union or interface.
    #[must_use]
    pub const fn resolve_type(&self) -> Option<&TypeResolver> {
        match self {
            Self::Union(UnionType { resolve_type, .. })
            | Self::Interface(InterfaceType { resolve_type, .. }) => resolve_type.as_ref(),
            _ => None,
        }
    }

    /// Returns true for unions and interfaces.
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        matches!(self, Self::Union(_) | Self::Interface(_))
    }

    /// Returns every type name this entry references.
    #[must_use]
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        match self {
            Self::Object(ObjectType {
                interfaces, fields, ..
            })
            | Self::Interface(InterfaceType {
                interfaces, fields, ..
            }) => {
                names.extend(interfaces.iter().map(String::as_str));
                for field in fields {
                    names.push(named_type(&field.ty));
                    names.extend(field.arguments.iter().map(|a| named_type(&a.ty)));
                }
            }
            Self::Union(t) => names.extend(t.members.iter().map(String::as_str)),
            Self::InputObject(t) => names.extend(t.fields.iter().map(|f| named_type(&f.ty))),
            Self::Enum(_) | Self::Scalar(_) => {}
        }
        names
    }
}

/// The live, mutable type registry of an assembled schema.
#[derive(Clone, Debug)]
pub struct Schema {
    types: BTreeMap<String, SchemaType>,
    /// Root query type name.
    pub query: Option<String>,
    /// Root mutation type name.
    pub mutation: Option<String>,
    /// Root subscription type name.
    pub subscription: Option<String>,
    pub(crate) explicit_roots: bool,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema {
    /// Creates a registry holding only the built-in scalars.
    #[must_use]
    pub fn new() -> Self {
        let types = skein_sdl::BUILTIN_SCALARS
            .iter()
            .map(|name| ((*name).to_string(), SchemaType::Scalar(ScalarType::builtin(name))))
            .collect();
        Self {
            types,
            query: None,
            mutation: None,
            subscription: None,
            explicit_roots: false,
        }
    }

    /// Returns the entry for a type name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    /// Returns the entry for a type name, mutably.
    pub fn get_type_mut(&mut self, name: &str) -> Option<&mut SchemaType> {
        self.types.get_mut(name)
    }

    /// Returns true if the registry has an entry for the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Inserts a new entry, returning false if the name is already taken.
    ///
    /// Existing entries are never replaced.
    pub fn insert_type(&mut self, ty: SchemaType) -> bool {
        let name = ty.name().to_string();
        if self.types.contains_key(&name) {
            return false;
        }
        self.types.insert(name, ty);
        true
    }

    /// Returns every entry in name order.
    pub fn types(&self) -> impl Iterator<Item = &SchemaType> {
        self.types.values()
    }

    /// Returns every entry in name order, mutably.
    pub fn types_mut(&mut self) -> impl Iterator<Item = &mut SchemaType> {
        self.types.values_mut()
    }

    /// Returns every type name in order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Returns the number of entries, built-in scalars included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the root query type entry.
    #[must_use]
    pub fn query_type(&self) -> Option<&SchemaType> {
        self.query.as_deref().and_then(|name| self.get_type(name))
    }

    /// Returns the concrete object types an abstract type may resolve to.
    ///
    /// For a union these are its members; for an interface, every object
    /// type that implements it. Other types have none.
    #[must_use]
    pub fn possible_types(&self, name: &str) -> Vec<&str> {
        match self.get_type(name) {
            Some(SchemaType::Union(t)) => t.members.iter().map(String::as_str).collect(),
            Some(SchemaType::Interface(_)) => self
                .types
                .values()
                .filter_map(|ty| match ty {
                    SchemaType::Object(obj) if obj.interfaces.iter().any(|i| i == name) => {
                        Some(obj.name.as_str())
                    }
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns every `(type, field)` pair still lacking a resolver.
    #[must_use]
    pub fn unresolved_fields(&self) -> Vec<(&str, &str)> {
        self.types
            .values()
            .flat_map(|ty| {
                ty.fields()
                    .iter()
                    .filter(|f| f.resolver.is_none())
                    .map(move |f| (ty.name(), f.name.as_str()))
            })
            .collect()
    }
}
