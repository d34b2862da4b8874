//! Integration tests for NodeKind
//!
//! Tests definition/extension pairing, keywords, and display.

use skein_foundation::NodeKind;

#[test]
fn every_kind_pairs_with_its_base() {
    for kind in NodeKind::ALL {
        let base = kind.base();
        assert!(!base.is_extension());
        assert!(base.extension().is_extension());
        assert_eq!(base.extension().base(), base);
    }
}

#[test]
fn definitions_and_extensions_alternate() {
    let extensions = NodeKind::ALL.iter().filter(|k| k.is_extension()).count();
    assert_eq!(extensions, NodeKind::ALL.len() / 2);
}

#[test]
fn keywords() {
    assert_eq!(NodeKind::ObjectExtension.keyword(), "type");
    assert_eq!(NodeKind::UnionDefinition.keyword(), "union");
    assert_eq!(NodeKind::InputObjectExtension.keyword(), "input");
}

#[test]
fn display_includes_extend() {
    assert_eq!(NodeKind::EnumDefinition.to_string(), "enum");
    assert_eq!(NodeKind::EnumExtension.to_string(), "extend enum");
}

#[test]
fn only_input_objects_are_not_output() {
    assert!(NodeKind::ScalarDefinition.is_output());
    assert!(!NodeKind::InputObjectDefinition.is_output());
    assert!(!NodeKind::InputObjectExtension.is_output());
}
