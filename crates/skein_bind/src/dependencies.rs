//! Structural dependencies of a schema node.

use std::collections::BTreeSet;

use skein_sdl::ast::TypeKind;
use skein_sdl::{TypeNode, named_type};

/// Returns the distinct type names a node structurally references.
///
/// - Union: its members.
/// - Object or interface: the innermost named type of every field's return
///   type and every argument type, plus implemented interfaces.
/// - Input object: the innermost named type of every input field.
/// - Scalar or enum: nothing.
///
/// Referenced types are not followed into their own fields.
#[must_use]
pub fn dependencies(node: &TypeNode) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    match &node.definition().kind {
        TypeKind::Union(_) => {
            names.extend(node.members().map(ToString::to_string));
        }
        TypeKind::Object(_) | TypeKind::Interface(_) => {
            names.extend(node.interfaces().map(ToString::to_string));
            for field in node.fields() {
                names.insert(named_type(&field.ty.node).to_string());
                for arg in &field.arguments {
                    names.insert(named_type(&arg.node.ty.node).to_string());
                }
            }
        }
        TypeKind::InputObject(_) => {
            for field in node.input_fields() {
                names.insert(named_type(&field.ty.node).to_string());
            }
        }
        TypeKind::Enum(_) | TypeKind::Scalar => {}
    }
    names
}
