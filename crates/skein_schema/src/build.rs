//! Building a live schema from parsed type nodes.
//!
//! Definitions are registered first, then every extension is merged onto
//! its definition, then every type reference is checked. The result has no
//! resolvers attached; declarations and default population supply those.

use std::collections::HashSet;

use skein_foundation::{Error, ErrorKind, NodeKind, Result, Value};
use skein_sdl::ast::{
    ConstDirective, EnumValueDefinition, FieldDefinition, InputValueDefinition, OperationType,
    SchemaDefinition, TypeKind,
};
use skein_sdl::{ConstValue, Positioned, SchemaDocument, TypeNode, find_directive, to_value};
use tracing::debug;

use crate::schema::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType, ObjectType,
    ScalarType, Schema, SchemaType, UnionType,
};

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

const OPERATIONS: [OperationType; 3] = [
    OperationType::Query,
    OperationType::Mutation,
    OperationType::Subscription,
];

/// Builds a live schema from a parsed document.
///
/// # Errors
/// - `DuplicateType` if two definitions share a name
/// - `UnknownType` if an extension or reference names a missing type
/// - `WrongNodeKind` if an extension's kind differs from its definition
/// - `DuplicateField` if a field, member, or enum value is declared twice
pub fn build_schema(document: &SchemaDocument) -> Result<Schema> {
    let mut schema = Schema::new();
    apply_nodes(&mut schema, document.type_nodes())?;
    assign_roots(&mut schema, document)?;

    debug!(
        types = schema.len(),
        query = schema.query.as_deref().unwrap_or("-"),
        "schema built"
    );
    Ok(schema)
}

impl Schema {
    /// Adds one type definition or extension to the registry.
    ///
    /// See [`Schema::extend_with_nodes`].
    ///
    /// # Errors
    /// Same as [`Schema::extend_with_nodes`].
    pub fn extend_with(&mut self, node: &TypeNode) -> Result<()> {
        self.extend_with_nodes(std::iter::once(node))
    }

    /// Adds type definitions and extensions to the registry.
    ///
    /// New definitions are registered before any extension is merged, so
    /// an extension may target a type defined in the same batch. Existing
    /// entries keep their attached resolvers. Conventional root names are
    /// filled in unless the schema declared its roots explicitly.
    ///
    /// On error the registry is left unchanged.
    ///
    /// # Errors
    /// - `DuplicateType` if a definition names an existing type
    /// - `UnknownType` if an extension or reference names a missing type
    /// - `WrongNodeKind` if an extension's kind differs from its definition
    /// - `DuplicateField` if a field, member, or enum value is declared twice
    pub fn extend_with_nodes<'a>(
        &mut self,
        nodes: impl IntoIterator<Item = &'a TypeNode>,
    ) -> Result<()> {
        let mut next = self.clone();
        apply_nodes(&mut next, nodes)?;
        if !next.explicit_roots {
            fill_conventional_roots(&mut next);
        }
        *self = next;
        Ok(())
    }
}

fn apply_nodes<'a>(
    schema: &mut Schema,
    nodes: impl IntoIterator<Item = &'a TypeNode>,
) -> Result<()> {
    let (extensions, definitions): (Vec<&TypeNode>, Vec<&TypeNode>) =
        nodes.into_iter().partition(|n| n.is_extension());

    for node in definitions {
        if !schema.insert_type(convert(node)?) {
            return Err(Error::new(ErrorKind::DuplicateType(node.name().to_string())));
        }
    }

    for node in extensions {
        let entry = schema
            .get_type_mut(node.name())
            .ok_or_else(|| Error::unknown_type(node.name()))?;
        merge(entry, node)?;
    }

    check_references(schema)
}

fn convert(node: &TypeNode) -> Result<SchemaType> {
    let type_name = node.name();
    let name = type_name.to_string();
    let description = node.description().map(ToString::to_string);

    let ty = match &node.definition().kind {
        TypeKind::Object(_) => SchemaType::Object(ObjectType {
            name,
            description,
            interfaces: node.interfaces().map(ToString::to_string).collect(),
            fields: convert_fields(node)?,
        }),
        TypeKind::Interface(_) => SchemaType::Interface(InterfaceType {
            name,
            description,
            interfaces: node.interfaces().map(ToString::to_string).collect(),
            fields: convert_fields(node)?,
            resolve_type: None,
        }),
        TypeKind::Union(_) => {
            check_unique(type_name, node.members())?;
            SchemaType::Union(UnionType {
                name,
                description,
                members: node.members().map(ToString::to_string).collect(),
                resolve_type: None,
            })
        }
        TypeKind::Enum(_) => {
            check_unique(type_name, node.enum_values().map(|v| v.value.node.as_str()))?;
            SchemaType::Enum(EnumType {
                name,
                description,
                values: node.enum_values().map(convert_enum_value).collect(),
            })
        }
        TypeKind::Scalar => {
            let mut scalar = ScalarType::new(name);
            scalar.description = description;
            scalar.specified_by = specified_by(node.directives());
            SchemaType::Scalar(scalar)
        }
        TypeKind::InputObject(_) => {
            check_unique(type_name, node.input_fields().map(|f| f.name.node.as_str()))?;
            SchemaType::InputObject(InputObjectType {
                name,
                description,
                fields: node.input_fields().map(convert_input_value).collect(),
            })
        }
    };
    Ok(ty)
}

fn convert_fields(node: &TypeNode) -> Result<Vec<Field>> {
    check_unique(node.name(), node.fields().map(|f| f.name.node.as_str()))?;
    Ok(node
        .fields()
        .map(|def: &FieldDefinition| Field {
            name: def.name.node.to_string(),
            description: def.description.as_ref().map(|d| d.node.clone()),
            ty: def.ty.node.clone(),
            arguments: def.arguments.iter().map(|a| convert_input_value(&a.node)).collect(),
            deprecation: deprecation(&def.directives),
            resolver: None,
        })
        .collect())
}

fn convert_input_value(def: &InputValueDefinition) -> InputValue {
    InputValue {
        name: def.name.node.to_string(),
        description: def.description.as_ref().map(|d| d.node.clone()),
        ty: def.ty.node.clone(),
        default_value: def.default_value.as_ref().map(|v| to_value(&v.node)),
    }
}

fn convert_enum_value(def: &EnumValueDefinition) -> EnumValue {
    let name = def.value.node.as_str();
    EnumValue {
        name: name.to_string(),
        description: def.description.as_ref().map(|d| d.node.clone()),
        deprecation: deprecation(&def.directives),
        value: Value::enumeration(name),
    }
}

fn string_argument(directive: &ConstDirective, name: &str) -> Option<String> {
    match directive.get_argument(name).map(|v| &v.node) {
        Some(ConstValue::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn deprecation(directives: &[Positioned<ConstDirective>]) -> Option<String> {
    let directive = find_directive(directives, "deprecated")?;
    Some(
        string_argument(directive, "reason")
            .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()),
    )
}

fn specified_by(directives: &[Positioned<ConstDirective>]) -> Option<String> {
    find_directive(directives, "specifiedBy").and_then(|d| string_argument(d, "url"))
}

fn check_unique<'a>(type_name: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(duplicate_field(type_name, name));
        }
    }
    Ok(())
}

fn duplicate_field(type_name: &str, field: &str) -> Error {
    Error::new(ErrorKind::DuplicateField {
        type_name: type_name.to_string(),
        field: field.to_string(),
    })
}

/// Merges one extension node onto its definition entry.
fn merge(entry: &mut SchemaType, node: &TypeNode) -> Result<()> {
    let type_name = node.name();
    if entry.kind() != node.kind().base() {
        return Err(Error::wrong_node_kind(
            type_name,
            node.kind().base(),
            entry.kind(),
        ));
    }

    match entry {
        SchemaType::Object(ObjectType {
            interfaces, fields, ..
        })
        | SchemaType::Interface(InterfaceType {
            interfaces, fields, ..
        }) => {
            for field in convert_fields(node)? {
                if fields.iter().any(|f| f.name == field.name) {
                    return Err(duplicate_field(type_name, &field.name));
                }
                fields.push(field);
            }
            for interface in node.interfaces() {
                if !interfaces.iter().any(|i| i == interface) {
                    interfaces.push(interface.to_string());
                }
            }
        }
        SchemaType::Union(union) => {
            for member in node.members() {
                if union.members.iter().any(|m| m == member) {
                    return Err(duplicate_field(type_name, member));
                }
                union.members.push(member.to_string());
            }
        }
        SchemaType::Enum(enumeration) => {
            for value in node.enum_values() {
                let name = value.value.node.as_str();
                if enumeration.value(name).is_some() {
                    return Err(duplicate_field(type_name, name));
                }
                enumeration.values.push(convert_enum_value(value));
            }
        }
        SchemaType::Scalar(scalar) => {
            if let Some(url) = specified_by(node.directives()) {
                scalar.specified_by = Some(url);
            }
        }
        SchemaType::InputObject(input) => {
            for field in node.input_fields() {
                let name = field.name.node.as_str();
                if input.fields.iter().any(|f| f.name == name) {
                    return Err(duplicate_field(type_name, name));
                }
                input.fields.push(convert_input_value(field));
            }
        }
    }
    Ok(())
}

fn check_references(schema: &Schema) -> Result<()> {
    for ty in schema.types() {
        if let Some(missing) = ty.references().into_iter().find(|r| !schema.contains(r)) {
            return Err(Error::unknown_type(missing));
        }
    }
    Ok(())
}

fn assign_roots(schema: &mut Schema, document: &SchemaDocument) -> Result<()> {
    let definitions = document
        .schema_definitions()
        .filter(|d| !d.extend)
        .chain(document.schema_definitions().filter(|d| d.extend));

    for definition in definitions {
        schema.explicit_roots |= !definition.extend;
        for operation in OPERATIONS {
            let Some(type_name) = declared_root(definition, operation) else {
                continue;
            };
            match schema.get_type(type_name) {
                Some(SchemaType::Object(_)) => {}
                Some(other) => {
                    return Err(Error::wrong_node_kind(
                        type_name,
                        NodeKind::ObjectDefinition,
                        other.kind(),
                    ));
                }
                None => return Err(Error::unknown_type(type_name)),
            }
            *root_slot(schema, operation) = Some(type_name.to_string());
        }
    }

    if !schema.explicit_roots {
        fill_conventional_roots(schema);
    }
    Ok(())
}

fn declared_root(definition: &SchemaDefinition, operation: OperationType) -> Option<&str> {
    let root = match operation {
        OperationType::Query => &definition.query,
        OperationType::Mutation => &definition.mutation,
        OperationType::Subscription => &definition.subscription,
    };
    root.as_ref().map(|name| name.node.as_str())
}

fn fill_conventional_roots(schema: &mut Schema) {
    for operation in OPERATIONS {
        let name = conventional_root(operation);
        if !matches!(schema.get_type(name), Some(SchemaType::Object(_))) {
            continue;
        }
        let slot = root_slot(schema, operation);
        if slot.is_none() {
            *slot = Some(name.to_string());
        }
    }
}

const fn conventional_root(operation: OperationType) -> &'static str {
    match operation {
        OperationType::Query => "Query",
        OperationType::Mutation => "Mutation",
        OperationType::Subscription => "Subscription",
    }
}

fn root_slot(schema: &mut Schema, operation: OperationType) -> &mut Option<String> {
    match operation {
        OperationType::Query => &mut schema.query,
        OperationType::Mutation => &mut schema.mutation,
        OperationType::Subscription => &mut schema.subscription,
    }
}
