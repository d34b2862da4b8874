//! Declaration binding and resolver attachment for Skein.
//!
//! This crate provides:
//! - [`Declaration`] - One author-written unit of behavior for a schema type
//! - [`DeclarationBuilder`] - Builds declarations and binds them eagerly
//! - [`Requirements`] - The ledger of types a declaration assumes exist
//! - [`dependencies`] - The type names a schema node structurally references
//! - [`make_executable_schema`] - Builds, attaches, and defaults in one pass
//!
//! # Binding
//!
//! Binding happens when a declaration is declared, not when the schema is
//! assembled. A declaration is located in its inline fragment or the shared
//! document, checked against its expected kinds, its requirement ledger and
//! the document's names, and then fixed to that node for good:
//!
//! ```text
//! DeclarationBuilder ──declare──▶ Declaration (bound)
//!                                      │
//!         build_schema ──▶ Schema ◀──extend_with_nodes── bound fragments
//!                            │    ◀──attach── every declaration
//!                            │
//!                   set_default_resolvers
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod attach;
mod binder;
pub mod config;
pub mod declaration;
pub mod dependencies;
pub mod executable;
pub mod requirements;

pub use config::BindConfig;
pub use declaration::{
    Behavior, BoundNode, Category, Declaration, DeclarationBuilder, EnumBehavior,
    InterfaceBehavior, NodeSource, ObjectBehavior, ScalarBehavior, UnionBehavior,
};
pub use dependencies::dependencies;
pub use executable::make_executable_schema;
pub use requirements::Requirements;
