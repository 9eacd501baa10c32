//! Node kinds and node identifiers.

use std::fmt;

/// The tag of a syntax node.
///
/// This is the closed set of node kinds the LESS grammar produces. Editor
/// features only inspect a handful of these (variable names, identifiers,
/// mixin declarations and references); the rest exist so the parser can
/// describe a whole document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The document root. Every tree has exactly one, and it has no parent.
    Stylesheet,
    Ruleset,
    Selector,
    SimpleSelector,
    Declaration,
    VariableDeclaration,
    /// A `@name` token, both at declaration and reference sites.
    VariableName,
    /// A bare identifier token inside a larger construct.
    Identifier,
    MixinDeclaration,
    MixinReference,
    MixinParameter,
    Import,
    Media,
    Value,
    Expression,
    NumericValue,
    StringLiteral,
    HexColorValue,
    FunctionCall,
    Operator,
}

/// A handle to a node within a [`SyntaxTree`](super::SyntaxTree).
///
/// `NodeId` is a lightweight index (just a u32) into the arena of the tree
/// that created it. Ids are only meaningful for that tree; using one with a
/// different tree is a logic error.
///
/// Using `NodeId` instead of references throughout:
/// - keeps the parent relation non-owning (no `Rc` cycles, no weak refs)
/// - makes comparisons and copies O(1)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(super) u32);

impl NodeId {
    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}
