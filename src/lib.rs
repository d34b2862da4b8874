//! Skein - Declaration binding for GraphQL schemas
//!
//! This crate re-exports all layers of the Skein system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: skein_bind        - Declarations, binding, attach, executable schema
//! Layer 2: skein_schema      - Live type registry, default resolvers
//! Layer 1: skein_sdl         - Parsed documents, type nodes (async-graphql-parser)
//! Layer 0: skein_foundation  - Core types (Value, NodeKind, Error)
//! ```

pub use skein_bind as bind;
pub use skein_foundation as foundation;
pub use skein_schema as schema;
pub use skein_sdl as sdl;
