//! Parsed GraphQL schema documents for Skein.
//!
//! Schema text is parsed with `async-graphql-parser`; this crate indexes the
//! result by type name and classifies every type definition by
//! [`NodeKind`](skein_foundation::NodeKind).
//!
//! This crate provides:
//! - [`SchemaDocument`] - A parsed document indexed by type name
//! - [`TypeNode`] - One type definition or extension with its node kind
//! - [`to_value`] - Conversion of schema literals into runtime values
//! - [`ast`] - The parser's syntax tree types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod literal;
pub mod node;

/// Syntax tree types produced by the schema parser.
pub use async_graphql_parser::types as ast;
pub use async_graphql_parser::{Pos, Positioned};
pub use async_graphql_value::{ConstValue, Name, Number};

pub use document::{BUILTIN_SCALARS, SchemaDocument, is_builtin_scalar, join_type_defs};
pub use literal::to_value;
pub use node::{TypeNode, find_directive, named_type};
