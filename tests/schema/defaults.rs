//! Integration tests for default resolvers
//!
//! Tests that defaults read parent keys and never replace attached resolvers.

use skein_foundation::{PMap, Value};
use skein_schema::{FieldResolver, Schema, build_schema, default_field_resolver, set_default_resolvers};
use skein_sdl::SchemaDocument;

fn schema() -> Schema {
    let doc = SchemaDocument::parse(
        "type Query { book: Book }\ntype Book { title: String year: Int }",
    )
    .unwrap();
    build_schema(&doc).unwrap()
}

#[test]
fn default_reads_parent_key() {
    let mut schema = schema();
    assert_eq!(set_default_resolvers(&mut schema), 3);

    let parent = Value::object([("title", Value::from("Dune")), ("year", Value::Int(1965))]);
    let args = PMap::new();
    assert_eq!(
        schema.resolve_field("Book", "title", &parent, &args).unwrap(),
        Value::from("Dune")
    );
    assert_eq!(
        schema.resolve_field("Book", "year", &parent, &args).unwrap(),
        Value::Int(1965)
    );
}

#[test]
fn default_yields_null_for_missing_key_or_non_object() {
    let resolver = default_field_resolver("title");
    let mut schema = schema();
    schema.get_type_mut("Book").and_then(|t| t.field_mut("title")).unwrap().resolver =
        Some(resolver);

    let args = PMap::new();
    let empty = Value::object(Vec::<(&str, Value)>::new());
    assert!(schema.resolve_field("Book", "title", &empty, &args).unwrap().is_null());
    assert!(schema.resolve_field("Book", "title", &Value::Int(1), &args).unwrap().is_null());
}

#[test]
fn defaults_keep_attached_resolvers() {
    let mut schema = schema();
    let custom = FieldResolver::new(|_| Ok(Value::from("custom")));
    schema.get_type_mut("Query").and_then(|t| t.field_mut("book")).unwrap().resolver =
        Some(custom.clone());

    assert_eq!(set_default_resolvers(&mut schema), 2);
    let field = schema.get_type("Query").unwrap().field("book").unwrap();
    assert!(field.resolver.as_ref().unwrap().ptr_eq(&custom));
    assert!(schema.unresolved_fields().is_empty());
}
