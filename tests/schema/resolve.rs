//! Integration tests for invoking attached behavior
//!
//! Tests field resolution, abstract type resolution, and leaf conversion.

use std::sync::Arc;

use skein_foundation::{ErrorKind, PMap, Value};
use skein_schema::{FieldResolver, ScalarFn, Schema, SchemaType, TypeResolver, build_schema};
use skein_sdl::{ConstValue, Name, SchemaDocument};

fn library() -> Schema {
    let doc = SchemaDocument::parse(
        "type Query { echo(text: String): String }\n\
         interface Named { name: String }\n\
         type Author implements Named { name: String }\n\
         type Editor implements Named { name: String }\n\
         type Book { title: String }\n\
         union SearchResult = Book | Author\n\
         enum Role { ADMIN USER }\n\
         scalar Date",
    )
    .unwrap();
    build_schema(&doc).unwrap()
}

fn set_type_resolver(schema: &mut Schema, name: &str, resolver: TypeResolver) {
    match schema.get_type_mut(name) {
        Some(SchemaType::Union(u)) => u.resolve_type = Some(resolver),
        Some(SchemaType::Interface(i)) => i.resolve_type = Some(resolver),
        _ => panic!("{name} is not abstract"),
    }
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn resolve_field_passes_arguments() {
    let mut schema = library();
    schema.get_type_mut("Query").and_then(|t| t.field_mut("echo")).unwrap().resolver =
        Some(FieldResolver::new(|info| {
            Ok(info.arg("text").cloned().unwrap_or_default())
        }));

    let args: PMap<Arc<str>, Value> = [(Arc::from("text"), Value::from("hi"))].into_iter().collect();
    let out = schema.resolve_field("Query", "echo", &Value::Null, &args).unwrap();
    assert_eq!(out, Value::from("hi"));
}

#[test]
fn resolve_field_errors() {
    let schema = library();
    let args = PMap::new();
    let err = schema.resolve_field("Nope", "x", &Value::Null, &args).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType(_)));
    let err = schema.resolve_field("Query", "nope", &Value::Null, &args).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownField { .. }));
    let err = schema.resolve_field("Query", "echo", &Value::Null, &args).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingResolver { .. }));
}

// =============================================================================
// Abstract Types
// =============================================================================

#[test]
fn interface_possible_types_are_implementors() {
    let schema = library();
    assert_eq!(schema.possible_types("Named"), vec!["Author", "Editor"]);
    assert!(schema.possible_types("Book").is_empty());
}

#[test]
fn resolve_abstract_type_checks_possible_types() {
    let mut schema = library();
    set_type_resolver(
        &mut schema,
        "SearchResult",
        TypeResolver::new(|v| Ok(v.get("kind").and_then(Value::as_str).unwrap_or("").to_string())),
    );

    let book = Value::object([("kind", "Book")]);
    assert_eq!(schema.resolve_abstract_type("SearchResult", &book).unwrap(), "Book");

    let editor = Value::object([("kind", "Editor")]);
    let err = schema.resolve_abstract_type("SearchResult", &editor).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Execution(_)));
}

#[test]
fn resolve_abstract_type_without_discriminator() {
    let schema = library();
    let err = schema.resolve_abstract_type("Named", &Value::Null).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Execution(_)));
    let err = schema.resolve_abstract_type("Book", &Value::Null).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Execution(_)));
}

// =============================================================================
// Leaf Types
// =============================================================================

#[test]
fn builtin_scalars_coerce() {
    let schema = library();
    assert_eq!(schema.serialize("Int", &Value::Int(7)).unwrap(), Value::Int(7));
    assert!(schema.serialize("Int", &Value::Int(i64::from(i32::MAX) + 1)).is_err());
    assert_eq!(schema.serialize("ID", &Value::Int(7)).unwrap(), Value::from("7"));
    assert_eq!(schema.serialize("Float", &Value::Int(2)).unwrap(), Value::Float(2.0));
    assert!(schema.serialize("Boolean", &Value::from("yes")).is_err());
}

#[test]
fn custom_scalar_defaults_to_identity() {
    let schema = library();
    let v = Value::from("2024-01-01");
    assert_eq!(schema.serialize("Date", &v).unwrap(), v);
    assert_eq!(schema.parse_value("Date", &v).unwrap(), v);
}

#[test]
fn custom_scalar_functions() {
    let mut schema = library();
    let Some(SchemaType::Scalar(date)) = schema.get_type_mut("Date") else {
        panic!("Date should be a scalar");
    };
    date.parse_value = Some(ScalarFn::new(|v| {
        v.as_str()
            .map(|s| Value::Int(s.len() as i64))
            .ok_or_else(|| skein_foundation::Error::execution("Date must be a string"))
    }));

    assert_eq!(
        schema.parse_value("Date", &Value::from("2024")).unwrap(),
        Value::Int(4)
    );
    assert_eq!(
        schema.parse_literal("Date", &ConstValue::String("1999-12".into())).unwrap(),
        Value::Int(7)
    );
    assert!(schema.parse_value("Date", &Value::Int(1)).is_err());
}

#[test]
fn enum_round_trip_through_runtime_value() {
    let mut schema = library();
    let Some(SchemaType::Enum(role)) = schema.get_type_mut("Role") else {
        panic!("Role should be an enum");
    };
    role.value_mut("ADMIN").unwrap().value = Value::Int(1);

    assert_eq!(
        schema.parse_value("Role", &Value::enumeration("ADMIN")).unwrap(),
        Value::Int(1)
    );
    assert_eq!(
        schema.serialize("Role", &Value::Int(1)).unwrap(),
        Value::enumeration("ADMIN")
    );
    let err = schema.parse_value("Role", &Value::enumeration("GUEST")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownEnumValue { .. }));
    assert!(schema.serialize("Role", &Value::Int(9)).is_err());
}

#[test]
fn non_leaf_types_are_rejected() {
    let schema = library();
    assert!(schema.serialize("Book", &Value::Null).is_err());
    assert!(schema.parse_literal("Role", &ConstValue::Enum(Name::new("ADMIN"))).is_err());
}
