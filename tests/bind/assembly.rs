//! Integration tests for executable schema assembly
//!
//! Tests every declaration category together with configuration switches.

use skein_bind::{BindConfig, Declaration, DeclarationBuilder, Requirements, make_executable_schema};
use skein_foundation::{ErrorKind, NodeKind, PMap, Value};
use skein_sdl::{ConstValue, SchemaDocument};

const CATALOG: &str = r#"
type Query {
  items: [Item]
  role(name: String): Role
}

interface Item {
  name: String
}

type Book implements Item {
  name: String
  published: Date
}

type Film implements Item {
  name: String
  rating: Role
}

union Media = Book | Film

enum Role {
  ADMIN
  USER
}

scalar Date @specifiedBy(url: "https://example.com/date")
"#;

fn catalog() -> SchemaDocument {
    SchemaDocument::parse(CATALOG).unwrap()
}

fn declarations(doc: &SchemaDocument) -> Vec<Declaration> {
    let item = DeclarationBuilder::interface("Item")
        .resolve_type(|v| {
            Ok(if v.get("published").is_some() { "Book" } else { "Film" }.to_string())
        })
        .declare(doc)
        .unwrap();
    let role = DeclarationBuilder::enumeration("Role")
        .value("ADMIN", 0)
        .value("USER", 1)
        .declare(doc)
        .unwrap();
    let date = DeclarationBuilder::scalar("Date")
        .serialize(|v| Ok(Value::from(format!("day-{}", v.as_int().unwrap_or_default()))))
        .parse_literal(|literal| match literal {
            ConstValue::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .ok_or_else(|| skein_foundation::Error::execution("Date literals are integers")),
            _ => Err(skein_foundation::Error::execution("Date literals are integers")),
        })
        .declare(doc)
        .unwrap();
    let query = DeclarationBuilder::object("Query")
        .requires_declaration(&role)
        .field("role", |info| {
            Ok(info.arg("name").cloned().unwrap_or(Value::enumeration("USER")))
        })
        .declare(doc)
        .unwrap();
    vec![item, role, date, query]
}

#[test]
fn every_category_attaches() {
    let doc = catalog();
    let decls = declarations(&doc);
    let schema = make_executable_schema(&doc, &decls, &BindConfig::default()).unwrap();

    let book = Value::object([("name", Value::from("Dune")), ("published", Value::Int(3))]);
    assert_eq!(schema.resolve_abstract_type("Item", &book).unwrap(), "Book");
    assert_eq!(schema.serialize("Role", &Value::Int(1)).unwrap(), Value::enumeration("USER"));
    assert_eq!(schema.parse_value("Role", &Value::enumeration("ADMIN")).unwrap(), Value::Int(0));
    assert_eq!(schema.serialize("Date", &Value::Int(3)).unwrap(), Value::from("day-3"));
    assert_eq!(schema.parse_literal("Date", &ConstValue::Number(9.into())).unwrap(), Value::Int(9));
    assert!(schema.parse_literal("Date", &ConstValue::String("x".into())).is_err());

    let published = schema.resolve_field("Book", "published", &book, &PMap::new()).unwrap();
    assert_eq!(published, Value::Int(3));
}

#[test]
fn requirement_from_declaration() {
    let doc = catalog();
    let decls = declarations(&doc);
    let query = &decls[3];
    assert_eq!(query.requirements().get("Role"), Some(NodeKind::EnumDefinition));
}

#[test]
fn strict_config_flags_member_kinds() {
    let doc = SchemaDocument::parse(
        "type Query { m: Mixed }\ntype Book { t: String }\nenum Role { A }\nunion Mixed = Book | Role",
    )
    .unwrap();
    let mixed = DeclarationBuilder::union("Mixed").build().unwrap();

    let err = make_executable_schema(&doc, [&mixed], &BindConfig::strict()).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::WrongNodeKind { ref name, expected: NodeKind::ObjectDefinition, .. } if name == "Role"
    ));
    assert!(!mixed.is_bound());
}

#[test]
fn strict_config_checks_extension_ledgers() {
    let doc = catalog();
    let fragment = "extend type Query { featured: Book }";
    let ledger = Requirements::new().require("Query", NodeKind::ObjectDefinition);

    let loose = DeclarationBuilder::object("Query")
        .fragment(fragment)
        .requirements(ledger.clone())
        .build()
        .unwrap();
    assert!(loose.bind_with(&doc, &BindConfig::default()).is_ok());

    let strict = DeclarationBuilder::object("Query")
        .fragment(fragment)
        .requirements(ledger.clone())
        .build()
        .unwrap();
    let err = strict.bind_with(&doc, &BindConfig::strict()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingRequirement { ref name, .. } if name == "Book"));

    let complete = DeclarationBuilder::object("Query")
        .fragment(fragment)
        .requirements(ledger.require("Book", NodeKind::ObjectDefinition))
        .build()
        .unwrap();
    assert!(complete.bind_with(&doc, &BindConfig::strict()).is_ok());
}

#[test]
fn fragment_extension_fields_reach_the_schema() {
    let doc = catalog();
    let query = DeclarationBuilder::object("Query")
        .fragment("extend type Query { featured: Book }")
        .requires("Query", NodeKind::ObjectDefinition)
        .field("featured", |_| Ok(Value::object([("name", Value::from("Dune"))])))
        .declare(&doc)
        .unwrap();

    let schema = make_executable_schema(&doc, [&query], &BindConfig::default()).unwrap();
    let field = schema.get_type("Query").and_then(|t| t.field("featured")).unwrap();
    assert_eq!(field.ty.to_string(), "Book");

    let featured = schema
        .resolve_field("Query", "featured", &Value::Null, &PMap::new())
        .unwrap();
    assert_eq!(featured.get("name"), Some(&Value::from("Dune")));
    assert!(doc.find("Query").unwrap().fields().all(|f| f.name.node.as_str() != "featured"));
}

#[test]
fn fragment_union_is_assembled_and_resolvable() {
    let doc = catalog();
    let pick = DeclarationBuilder::union("Pick")
        .fragment("union Pick = Book | Film")
        .resolve_type(|v| {
            Ok(if v.get("published").is_some() { "Book" } else { "Film" }.to_string())
        })
        .build()
        .unwrap();

    let schema = make_executable_schema(&doc, [&pick], &BindConfig::default()).unwrap();
    assert_eq!(
        schema.get_type("Pick").map(|t| t.kind()),
        Some(NodeKind::UnionDefinition)
    );
    assert_eq!(schema.possible_types("Pick"), vec!["Book", "Film"]);

    let film = Value::object([("name", Value::from("Alien"))]);
    assert_eq!(schema.resolve_abstract_type("Pick", &film).unwrap(), "Film");
}

#[test]
fn fragment_types_clashing_with_document_are_rejected() {
    let doc = catalog();
    let role = DeclarationBuilder::enumeration("Role")
        .fragment("enum Role { GUEST }")
        .build()
        .unwrap();

    let err = make_executable_schema(&doc, [&role], &BindConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateType(ref n) if n == "Role"));
}

#[test]
fn defaults_disabled_leave_fields_unresolved() {
    let doc = catalog();
    let decls = declarations(&doc);
    let config = BindConfig::default().with_default_resolvers(false);
    let schema = make_executable_schema(&doc, &decls, &config).unwrap();

    let unresolved = schema.unresolved_fields();
    assert!(unresolved.contains(&("Book", "name")));
    assert!(!unresolved.contains(&("Query", "role")));
}
