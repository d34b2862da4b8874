//! Integration tests for the document index
//!
//! Tests name lookup across definitions, extensions, and fragments.

use skein_foundation::NodeKind;
use skein_sdl::{BUILTIN_SCALARS, SchemaDocument, TypeNode, join_type_defs};

fn library() -> SchemaDocument {
    SchemaDocument::from_fragments(&[
        "type Query { books: [Book] }",
        "extend type Query { authors: [Author] }",
        "type Book { title: String }\ntype Author { name: String }",
        "union SearchResult = Book",
        "extend union SearchResult = Author",
    ])
    .unwrap()
}

#[test]
fn fragments_join_into_one_document() {
    let joined = join_type_defs(&["type A { a: Int }", "   ", "type B { b: Int }\n"]);
    assert_eq!(joined.matches("type").count(), 2);
    assert!(joined.contains("}\n\ntype B"));

    let doc = SchemaDocument::parse(&joined).unwrap();
    assert_eq!(doc.len(), 2);
}

#[test]
fn definition_and_extensions_are_separate() {
    let doc = library();
    assert_eq!(
        doc.definition_of("Query").map(TypeNode::kind),
        Some(NodeKind::ObjectDefinition)
    );
    let extensions: Vec<_> = doc.extensions_of("Query").collect();
    assert_eq!(extensions.len(), 1);
    assert_eq!(extensions[0].fields().next().map(|f| f.name.node.as_str()), Some("authors"));
}

#[test]
fn nodes_named_preserves_source_order() {
    let doc = library();
    let kinds: Vec<NodeKind> = doc.nodes_named("SearchResult").map(TypeNode::kind).collect();
    assert_eq!(kinds, vec![NodeKind::UnionDefinition, NodeKind::UnionExtension]);
}

#[test]
fn unknown_names() {
    let doc = library();
    assert!(doc.find("Publisher").is_none());
    assert!(doc.definition_of("Publisher").is_none());
    assert_eq!(doc.nodes_named("Publisher").count(), 0);
    assert!(!doc.mentions("Publisher"));
}

#[test]
fn builtins_are_defined_but_not_mentioned() {
    let doc = library();
    for name in BUILTIN_SCALARS {
        assert!(doc.defines(name));
        assert!(!doc.mentions(name));
    }
}

#[test]
fn names_are_sorted_and_unique() {
    let doc = library();
    assert_eq!(
        doc.names().collect::<Vec<_>>(),
        vec!["Author", "Book", "Query", "SearchResult"]
    );
    assert_eq!(doc.type_nodes().count(), 6);
}

#[test]
fn schema_blocks_are_kept_apart_from_types() {
    let doc = SchemaDocument::parse("schema { query: Root }\ntype Root { ok: Boolean }").unwrap();
    assert_eq!(doc.schema_definitions().count(), 1);
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.find("Root").map(TypeNode::name), Some("Root"));
}
