//! Cursor-offset to node mapping, driven the way a host layer would.

use crate::helpers::fixtures::*;
use cascade::hir::SymbolTable;
use cascade::ide::hover;
use cascade::syntax::NodeKind;

#[test]
fn test_offset_lands_on_the_variable_token() {
    let (tree, variable) = variable_reference_tree("color");

    // Anywhere inside the token, including its end boundary.
    assert_eq!(tree.node_at_offset(20.into()), Some(variable));
    assert_eq!(tree.node_at_offset(30.into()), Some(variable));
}

#[test]
fn test_offset_between_tokens_lands_on_enclosing_node() {
    let (tree, variable) = variable_reference_tree("color");

    let node = tree.node_at_offset(5.into()).unwrap();
    assert_ne!(node, variable);
    assert_eq!(tree.kind(node), NodeKind::Ruleset);
}

#[test]
fn test_offset_to_hover_pipeline() {
    let table = SymbolTable::from_iter([document_with_variable(
        "a.less",
        &[],
        "color",
        "red",
    )]);
    let (tree, _) = variable_reference_tree("color");

    // The host resolves the offset, the hover pipeline does the rest.
    let cursor = tree.node_at_offset(20.into()).unwrap();
    let result = hover(&table, &tree, cursor, "a.less").unwrap();

    assert_eq!(result.contents.value, "color: red");
}
