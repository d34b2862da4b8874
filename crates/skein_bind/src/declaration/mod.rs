//! Author-written declarations of schema type behavior.
//!
//! A declaration names one schema type, says which category of node it
//! binds to, optionally carries its own SDL fragment and requirement
//! ledger, and holds the executable behavior to attach.
//!
//! The flow is: `DeclarationBuilder` → `declare` (bind) → `Declaration` → `attach`
//!
//! # Module Structure
//!
//! - `types` - Categories, behaviors, and the bound node
//! - `builder` - The `DeclarationBuilder` authoring surface

mod builder;
mod types;


use std::sync::OnceLock;

// Re-export types
pub use types::{
    Behavior, BoundNode, Category, EnumBehavior, InterfaceBehavior, NodeSource, ObjectBehavior,
    ScalarBehavior, UnionBehavior,
};

// Re-export builder
pub use builder::DeclarationBuilder;

use crate::requirements::Requirements;

/// One author-written unit of behavior for a schema type.
///
/// A declaration is immutable after construction except for the one-time
/// assignment of its bound node.
#[derive(Debug)]
pub struct Declaration {
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) fragment: Option<String>,
    pub(crate) requirements: Requirements,
    pub(crate) behavior: Behavior,
    pub(crate) bound: OnceLock<BoundNode>,
}

impl Declaration {
    /// Returns the type name this declaration binds to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declaration category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the inline SDL fragment, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the requirement ledger.
    #[must_use]
    pub const fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Returns the executable behavior.
    #[must_use]
    pub const fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Returns the node kinds this declaration may bind to.
    #[must_use]
    pub const fn expected_kinds(&self) -> [skein_foundation::NodeKind; 2] {
        self.category.expected_kinds()
    }

    /// Returns the bound node, once bound.
    #[must_use]
    pub fn bound(&self) -> Option<&BoundNode> {
        self.bound.get()
    }

    /// Returns true once the declaration is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound.get().is_some()
    }

    /// Returns true if the declaration is bound to an extension node.
    ///
    /// Unbound declarations are not extensions.
    #[must_use]
    pub fn is_extension(&self) -> bool {
        self.bound().is_some_and(BoundNode::is_extension)
    }
}
