//! Parsed schema documents indexed by type name.
//!
//! A [`SchemaDocument`] is the unit that declarations bind against. It keeps
//! the type definitions of a parsed [`ServiceDocument`] plus a name index so
//! lookups do not rescan the definition list.

use std::collections::BTreeMap;

use async_graphql_parser::parse_schema;
use async_graphql_parser::types::{SchemaDefinition, ServiceDocument, TypeSystemDefinition};
use skein_foundation::{Error, ErrorKind, Result};

use crate::node::TypeNode;

/// Scalars every schema knows without declaring them.
pub const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Returns true if `name` is one of the built-in scalars.
#[must_use]
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// Joins schema text fragments into one document source.
///
/// Each fragment is trimmed and fragments are separated by a blank line.
/// Empty fragments are skipped.
#[must_use]
pub fn join_type_defs<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments
        .iter()
        .map(|f| f.as_ref().trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A parsed schema document with a type-name index.
#[derive(Clone, Debug, Default)]
pub struct SchemaDocument {
    nodes: Vec<TypeNode>,
    schemas: Vec<SchemaDefinition>,
    /// Type name to indices into `nodes`, in source order.
    index: BTreeMap<String, Vec<usize>>,
}

impl SchemaDocument {
    /// Parses schema text into an indexed document.
    ///
    /// Blank text yields an empty document.
    ///
    /// # Errors
    /// Returns a `ParseError` carrying the line and column of the first
    /// syntax problem.
    pub fn parse(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        parse_schema(source)
            .map(Self::from_service_document)
            .map_err(|err| parse_error(source, &err))
    }

    /// Joins and parses several schema text fragments.
    ///
    /// # Errors
    /// Returns a parse error if the joined text is not valid schema text.
    pub fn from_fragments<S: AsRef<str>>(fragments: &[S]) -> Result<Self> {
        Self::parse(&join_type_defs(fragments))
    }

    /// Indexes an already parsed document.
    ///
    /// Directive definitions carry nothing binding needs and are dropped.
    #[must_use]
    pub fn from_service_document(document: ServiceDocument) -> Self {
        let mut this = Self::default();
        for definition in document.definitions {
            match definition {
                TypeSystemDefinition::Type(def) => {
                    let node = TypeNode::new(def);
                    this.index
                        .entry(node.name().to_string())
                        .or_default()
                        .push(this.nodes.len());
                    this.nodes.push(node);
                }
                TypeSystemDefinition::Schema(def) => this.schemas.push(def.node),
                TypeSystemDefinition::Directive(_) => {}
            }
        }
        this
    }

    /// Returns every type node with the given name, in source order.
    pub fn nodes_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a TypeNode> + use<'a> {
        self.index
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|&i| self.nodes.get(i))
    }

    /// Returns the first definition (non-extension) node with the given name.
    #[must_use]
    pub fn definition_of(&self, name: &str) -> Option<&TypeNode> {
        self.nodes_named(name).find(|node| !node.is_extension())
    }

    /// Returns every extension node with the given name, in source order.
    pub fn extensions_of<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a TypeNode> + use<'a> {
        self.nodes_named(name).filter(|node| node.is_extension())
    }

    /// Finds the node a name refers to.
    ///
    /// The definition is preferred; if the name only appears as an
    /// extension, the first extension is returned.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TypeNode> {
        self.definition_of(name)
            .or_else(|| self.nodes_named(name).next())
    }

    /// Returns true if the name has a definition here or is a built-in scalar.
    #[must_use]
    pub fn defines(&self, name: &str) -> bool {
        is_builtin_scalar(name) || self.definition_of(name).is_some()
    }

    /// Returns true if any node, definition or extension, carries the name.
    #[must_use]
    pub fn mentions(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns every indexed type name in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Returns every type node in source order.
    pub fn type_nodes(&self) -> impl Iterator<Item = &TypeNode> {
        self.nodes.iter()
    }

    /// Returns every `schema` definition and extension in source order.
    pub fn schema_definitions(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.schemas.iter()
    }

    /// Returns the number of type nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document has no type nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn parse_error(source: &str, err: &async_graphql_parser::Error) -> Error {
    let pos = err.positions().next().unwrap_or_default();
    let context = source
        .lines()
        .nth(pos.line.saturating_sub(1))
        .unwrap_or_default()
        .to_string();
    let message = match err {
        async_graphql_parser::Error::Syntax { message, .. } => message
            .lines()
            .map(str::trim)
            .rfind(|line| line.starts_with('='))
            .map_or_else(|| message.clone(), |line| line.trim_start_matches("= ").to_string()),
        other => other.to_string(),
    };
    Error::new(ErrorKind::ParseError {
        message,
        line: u32::try_from(pos.line).unwrap_or(u32::MAX),
        column: u32::try_from(pos.column).unwrap_or(u32::MAX),
        context,
    })
}
