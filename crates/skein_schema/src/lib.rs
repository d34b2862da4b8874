//! Live schema type registry for Skein.
//!
//! This crate provides:
//! - [`Schema`] - The mutable type registry resolvers are attached to
//! - [`build_schema`] - Builds a registry from a parsed [`SchemaDocument`]
//! - [`set_default_resolvers`] - Fills fields left without a resolver
//! - Resolver function types ([`FieldResolver`], [`TypeResolver`], [`ScalarFn`], [`LiteralParser`])
//!
//! [`SchemaDocument`]: skein_sdl::SchemaDocument

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod build;
pub mod defaults;
pub mod resolve;
pub mod resolver;
pub mod scalars;
pub mod schema;

pub use build::build_schema;
pub use defaults::{default_field_resolver, set_default_resolvers};
pub use resolver::{FieldResolver, LiteralParser, ResolveInfo, ScalarFn, TypeResolver};
pub use schema::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType, ObjectType,
    ScalarType, Schema, SchemaType, UnionType,
};
