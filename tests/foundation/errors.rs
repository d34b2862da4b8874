//! Integration tests for Error types
//!
//! Tests error construction, display, subjects, and context.

use skein_foundation::{Error, ErrorContext, ErrorKind, NodeKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_missing_definition() {
    let err = Error::missing_definition("SearchResultDecl", "SearchResult");
    assert!(matches!(err.kind, ErrorKind::MissingDefinition { .. }));
    let msg = err.to_string();
    assert!(msg.contains("SearchResultDecl"));
    assert!(msg.contains("SearchResult"));
    assert_eq!(err.subject(), Some("SearchResult"));
}

#[test]
fn error_wrong_node_kind() {
    let err = Error::wrong_node_kind("Role", NodeKind::UnionDefinition, NodeKind::EnumDefinition);
    assert_eq!(
        err.to_string(),
        "'Role' is defined as 'enum' (expected 'union')"
    );
}

#[test]
fn error_wrong_requirement_kind() {
    let err = Error::wrong_requirement_kind(
        "Query",
        "Book",
        NodeKind::ObjectDefinition,
        NodeKind::UnionDefinition,
    );
    let msg = err.to_string();
    assert!(msg.contains("'type'"));
    assert!(msg.contains("'union'"));
    assert_eq!(err.subject(), Some("Book"));
}

#[test]
fn error_undeclared_dependency() {
    let err = Error::undeclared_dependency("SearchResult", "Book");
    assert!(err.to_string().contains("undeclared type 'Book'"));
    assert_eq!(err.subject(), Some("Book"));
}

#[test]
fn error_already_bound_names_declaration() {
    let err = Error::already_bound("Query");
    assert!(matches!(err.kind, ErrorKind::AlreadyBound { .. }));
    assert_eq!(err.subject(), Some("Query"));
}

#[test]
fn error_without_subject() {
    assert!(Error::execution("boom").subject().is_none());
    assert!(Error::internal("boom").subject().is_none());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new()
        .with_source("schema.graphql")
        .with_position(3, 7)
        .with_frame("bind Query");
    let text = ctx.to_string();
    assert!(text.starts_with("at schema.graphql:3:7"));
    assert!(text.contains("in bind Query"));
}

#[test]
fn error_with_context() {
    let err = Error::unknown_type("Missing").with_context(ErrorContext::new().with_source("doc"));
    assert_eq!(err.context.and_then(|c| c.source).as_deref(), Some("doc"));
}
