//! Fixture constructors for syntax trees and symbol tables.
//!
//! Trees are built the way the parser would build them for small LESS
//! snippets, down to the node the cursor would land on.

use cascade::TextRange;
use cascade::hir::{DocumentSymbols, Mixin, Variable};
use cascade::syntax::{NodeId, NodeKind, SyntaxTree, TreeBuilder};

pub fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

/// A document entry with its direct-import list.
pub fn document(name: &str, imports: &[&str]) -> DocumentSymbols {
    let mut entry = DocumentSymbols::new(name);
    entry.imports = imports.iter().map(|import| (*import).into()).collect();
    entry
}

/// A document entry declaring a single variable.
pub fn document_with_variable(
    name: &str,
    imports: &[&str],
    variable: &str,
    value: &str,
) -> DocumentSymbols {
    let mut entry = document(name, imports);
    entry.variables.push(Variable::new(variable, value));
    entry
}

/// A document entry declaring a single mixin.
pub fn document_with_mixin(name: &str, imports: &[&str], mixin: Mixin) -> DocumentSymbols {
    let mut entry = document(name, imports);
    entry.mixins.push(mixin);
    entry
}

/// Tree for `.selector { prop: @name; }` with the cursor node on `@name`.
pub fn variable_reference_tree(name: &str) -> (SyntaxTree, NodeId) {
    let mut builder = TreeBuilder::stylesheet(range(0, 40));
    let root = builder.root();
    let ruleset = builder.node(root, NodeKind::Ruleset, range(0, 38)).unwrap();
    let declaration = builder
        .node(ruleset, NodeKind::Declaration, range(12, 34))
        .unwrap();
    let value = builder
        .node(declaration, NodeKind::Value, range(18, 34))
        .unwrap();
    let variable = builder
        .named(value, NodeKind::VariableName, name, range(18, 30))
        .unwrap();
    (builder.finish(), variable)
}

/// Tree for `.name();` with the cursor node on the identifier inside the
/// mixin reference.
pub fn mixin_reference_tree(name: &str) -> (SyntaxTree, NodeId) {
    let mut builder = TreeBuilder::stylesheet(range(0, 20));
    let root = builder.root();
    let reference = builder
        .named(root, NodeKind::MixinReference, name, range(0, 18))
        .unwrap();
    let identifier = builder
        .named(reference, NodeKind::Identifier, name, range(1, 8))
        .unwrap();
    (builder.finish(), identifier)
}

/// Tree for `.name(...) { ... }` with the cursor node on the identifier
/// inside the mixin declaration.
pub fn mixin_declaration_tree(name: &str) -> (SyntaxTree, NodeId) {
    let mut builder = TreeBuilder::stylesheet(range(0, 30));
    let root = builder.root();
    let declaration = builder
        .named(root, NodeKind::MixinDeclaration, name, range(0, 28))
        .unwrap();
    let identifier = builder
        .named(declaration, NodeKind::Identifier, name, range(1, 8))
        .unwrap();
    (builder.finish(), identifier)
}
