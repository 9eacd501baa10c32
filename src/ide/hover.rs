//! Hover information implementation.

use smol_str::SmolStr;

use crate::hir::{
    self, DocumentLocation, Mixin, SymbolInfo, SymbolKind, SymbolTable, Variable,
};
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

/// Language id attached to hover content so renderers can apply syntax
/// coloring.
pub const LANGUAGE_ID: &str = "less";

/// Appended when the declaring document is reachable only transitively.
const IMPLICIT_SUFFIX: &str = " (implicitly)";

/// A content block tagged with the language it should be highlighted as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkedString {
    pub language: &'static str,
    pub value: String,
}

impl MarkedString {
    fn less(value: String) -> Self {
        Self {
            language: LANGUAGE_ID,
            value,
        }
    }

    /// True for the intentionally blank result of an unresolved identifier.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hover {
    /// The hover content. Empty when the identifier under the cursor has no
    /// known declaration.
    pub contents: MarkedString,
}

/// The identifier under the cursor: what kind of symbol it refers to, and
/// its name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub kind: SymbolKind,
    pub name: SmolStr,
}

/// Classify the node under the cursor.
///
/// A `VariableName` node is a variable reference with the node's own name.
/// A bare `Identifier` is a mixin reference if an enclosing mixin
/// declaration, or failing that an enclosing mixin reference, gives it a
/// name. Anything else is not hoverable. Nodes without a recorded name
/// yield `None` as well.
pub fn identifier_at(tree: &SyntaxTree, node: NodeId) -> Option<Identifier> {
    match tree.kind(node) {
        NodeKind::VariableName => Some(Identifier {
            kind: SymbolKind::Variable,
            name: SmolStr::new(tree.name(node)?),
        }),
        NodeKind::Identifier => {
            let mixin = tree
                .self_or_ancestor(node, NodeKind::MixinDeclaration)
                .or_else(|| tree.self_or_ancestor(node, NodeKind::MixinReference))?;
            Some(Identifier {
                kind: SymbolKind::Mixin,
                name: SmolStr::new(tree.name(mixin)?),
            })
        }
        _ => None,
    }
}

/// Get hover information for the node under the cursor.
///
/// # Arguments
/// * `table` - Symbol entries for the workspace, in precedence order
/// * `tree` - The current document's syntax tree
/// * `node` - The node under the cursor
/// * `current_path` - Identifier of the current document
///
/// # Returns
/// `None` when the cursor is not on a hoverable identifier. When the
/// identifier exists but nothing in the table declares it, the result has
/// empty contents: a valid blank popup, not an error.
pub fn hover(
    table: &SymbolTable,
    tree: &SyntaxTree,
    node: NodeId,
    current_path: &str,
) -> Option<Hover> {
    let identifier = identifier_at(tree, node)?;

    // Imports for the current document
    let direct_imports = hir::direct_imports_of(table, current_path);

    let contents = match hir::resolve(table, identifier.kind, &identifier.name, current_path) {
        Some(symbol) => {
            let suffix = if hir::is_implicit(&symbol, direct_imports) {
                IMPLICIT_SUFFIX
            } else {
                ""
            };
            match symbol.info {
                SymbolInfo::Variable(variable) => variable_markup(variable, &symbol.path, suffix),
                SymbolInfo::Mixin(mixin) => mixin_markup(mixin, &symbol.path, suffix),
            }
        }
        None => MarkedString::less(String::new()),
    };

    Some(Hover { contents })
}

/// Render a variable declaration as highlighted source text.
fn variable_markup(variable: &Variable, path: &DocumentLocation, suffix: &str) -> MarkedString {
    let suffix = annotate_import(path, suffix);
    MarkedString::less(format!("{}: {}{}", variable.name, variable.value, suffix))
}

/// Render a mixin signature as highlighted source text, with an ellipsis
/// standing in for the body.
fn mixin_markup(mixin: &Mixin, path: &DocumentLocation, suffix: &str) -> MarkedString {
    let args = mixin
        .parameters
        .iter()
        .map(|parameter| match &parameter.value {
            Some(value) => format!("{}: {}", parameter.name, value),
            None => parameter.name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");

    let full_name = match &mixin.parent {
        Some(parent) => format!("{} {}", parent, mixin.name),
        None => mixin.name.to_string(),
    };

    let suffix = annotate_import(path, suffix);
    MarkedString::less(format!("{full_name}({args}) {{\u{2026}}}{suffix}"))
}

/// Prepend the `@import` annotation to the suffix when the declaration
/// lives in another document. The implicit marker, if any, stays last.
fn annotate_import(path: &DocumentLocation, suffix: &str) -> String {
    match path {
        DocumentLocation::Current => suffix.to_string(),
        DocumentLocation::Other(path) => format!("\n@import \"{path}\"{suffix}"),
    }
}
