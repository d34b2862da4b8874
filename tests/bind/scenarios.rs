//! End-to-end binding scenarios
//!
//! Each test walks one declaration from construction through attachment.

use std::sync::Arc;
use std::thread;

use skein_bind::{BindConfig, DeclarationBuilder, NodeSource, make_executable_schema};
use skein_foundation::{ErrorKind, NodeKind, PMap, Value};
use skein_schema::{Schema, SchemaType, TypeResolver, build_schema};
use skein_sdl::SchemaDocument;

fn library() -> SchemaDocument {
    SchemaDocument::from_fragments(&[
        "type Query { books: [Book] search(term: String): [SearchResult] }",
        "type Book { title: String author: Author }",
        "type Author { name: String }",
        "union SearchResult = Book | Author",
    ])
    .unwrap()
}

fn discriminator(value: &Value) -> skein_foundation::Result<String> {
    Ok(if value.get("title").is_some() { "Book" } else { "Author" }.to_string())
}

// =============================================================================
// Scenario A: union with discriminator
// =============================================================================

#[test]
fn union_binds_and_attaches_discriminator() {
    let doc = library();
    let search = DeclarationBuilder::union("SearchResult")
        .resolve_type(discriminator)
        .declare(&doc)
        .unwrap();
    assert!(search.requirements().is_empty());
    assert_eq!(search.bound().unwrap().kind(), NodeKind::UnionDefinition);

    let mut schema = build_schema(&doc).unwrap();
    search.attach(&mut schema).unwrap();

    let attached = schema.get_type("SearchResult").unwrap().resolve_type().unwrap();
    let declared = search.behavior().type_resolver().unwrap();
    assert!(attached.ptr_eq(declared));

    let author = Value::object([("name", "Herbert")]);
    assert_eq!(schema.resolve_abstract_type("SearchResult", &author).unwrap(), "Author");
}

// =============================================================================
// Scenario B: extension without its base in the ledger
// =============================================================================

#[test]
fn extension_without_ledger_entry_fails() {
    let doc = SchemaDocument::from_fragments(&[
        "type Query { books: [Book] }",
        "extend type Query { authors: [Author] }",
        "type Book { t: String }\ntype Author { n: String }",
    ])
    .unwrap();
    let fragment = "extend type Query { authors: [Author] }";

    let err = DeclarationBuilder::object("Query")
        .fragment(fragment)
        .declare(&doc)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MissingRequirement { ref name, .. } if name == "Query"
    ));

    let decl = DeclarationBuilder::object("Query")
        .fragment(fragment)
        .requires("Query", NodeKind::ObjectDefinition)
        .declare(&doc)
        .unwrap();
    assert!(decl.is_extension());
    assert_eq!(decl.bound().unwrap().source, NodeSource::Fragment);
}

// =============================================================================
// Scenario C: dangling member reference
// =============================================================================

#[test]
fn undeclared_member_is_named() {
    let doc = SchemaDocument::parse("type Book { t: String }\nunion Media = Book | Film").unwrap();
    let err = DeclarationBuilder::union("Media").declare(&doc).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UndeclaredDependency { ref declaration, ref name }
            if declaration == "Media" && name == "Film"
    ));
    assert!(err.to_string().contains("Film"));
}

#[test]
fn undeclared_dependency_applies_to_extensions() {
    let doc = library();
    let err = DeclarationBuilder::union("SearchResult")
        .fragment("extend union SearchResult = Publisher")
        .requires("SearchResult", NodeKind::UnionDefinition)
        .declare(&doc)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UndeclaredDependency { ref name, .. } if name == "Publisher"
    ));
}

// =============================================================================
// Scenario D: rebinding
// =============================================================================

#[test]
fn second_bind_fails_and_keeps_node() {
    let doc = library();
    let decl = DeclarationBuilder::union("SearchResult").declare(&doc).unwrap();
    let before = decl.bound().unwrap() as *const _;

    let other = SchemaDocument::parse("union SearchResult = Book\ntype Book { t: String }").unwrap();
    let err = decl.bind(&other).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AlreadyBound { .. }));
    assert!(std::ptr::eq(decl.bound().unwrap(), before));
    assert_eq!(decl.bound().unwrap().node.members().count(), 2);
}

#[test]
fn concurrent_binds_succeed_exactly_once() {
    let doc = Arc::new(library());
    let decl = Arc::new(DeclarationBuilder::object("Book").build().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let doc = Arc::clone(&doc);
            let decl = Arc::clone(&decl);
            thread::spawn(move || decl.bind(&doc).map(|_| ()))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.iter().filter_map(|r| r.as_ref().err()).all(|e| matches!(
        e.kind,
        ErrorKind::AlreadyBound { .. }
    )));
    assert!(decl.is_bound());
}

// =============================================================================
// Attach against a different document
// =============================================================================

#[test]
fn attach_to_schema_from_other_document() {
    let doc = library();
    let author = DeclarationBuilder::object("Author")
        .field("name", |_| Ok(Value::from("Herbert")))
        .declare(&doc)
        .unwrap();

    let smaller = SchemaDocument::parse("type Query { ok: Boolean }").unwrap();
    let mut schema = build_schema(&smaller).unwrap();
    let names_before: Vec<String> = schema.type_names().map(str::to_string).collect();

    let err = author.attach(&mut schema).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSchemaType(ref n) if n == "Author"));
    let names_after: Vec<String> = schema.type_names().map(str::to_string).collect();
    assert_eq!(names_before, names_after);
}

// =============================================================================
// Full assembly
// =============================================================================

#[test]
fn library_end_to_end() {
    let doc = library();
    let query = DeclarationBuilder::object("Query")
        .field("books", |_| {
            let author = Value::object([("name", "Herbert")]);
            let dune = Value::object([("title", Value::from("Dune")), ("author", author)]);
            Ok(Value::from(vec![dune]))
        })
        .declare(&doc)
        .unwrap();
    let search = DeclarationBuilder::union("SearchResult")
        .resolve_type(discriminator)
        .declare(&doc)
        .unwrap();

    let schema: Schema =
        make_executable_schema(&doc, [&query, &search], &BindConfig::default()).unwrap();
    assert!(schema.unresolved_fields().is_empty());

    let args = PMap::new();
    let books = schema.resolve_field("Query", "books", &Value::Null, &args).unwrap();
    let Value::List(books) = books else {
        panic!("books should be a list");
    };
    let dune = books.first().unwrap();
    let author = schema.resolve_field("Book", "author", dune, &args).unwrap();
    let name = schema.resolve_field("Author", "name", &author, &args).unwrap();
    assert_eq!(name, Value::from("Herbert"));

    let Some(SchemaType::Union(union)) = schema.get_type("SearchResult") else {
        panic!("SearchResult should be a union");
    };
    assert!(union.resolve_type.as_ref().is_some_and(|r: &TypeResolver| {
        r.ptr_eq(search.behavior().type_resolver().unwrap())
    }));
}
