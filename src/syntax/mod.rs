//! Syntax primitives for LESS documents.
//!
//! The parser (a sibling crate) produces one [`SyntaxTree`] per document via
//! [`TreeBuilder`]. Nodes are stored in an arena and addressed by [`NodeId`];
//! the parent relation is a non-owning back reference into the same arena,
//! so a node's lifetime is governed by the tree, never by code that walks it.
//!
//! Guarantees enforced at construction time:
//! - exactly one root, tagged [`NodeKind::Stylesheet`], with no parent
//! - every other node has a parent that exists in the same tree

mod node;
mod tree;

pub use node::{NodeId, NodeKind};
pub use tree::{SyntaxTree, TreeBuilder, TreeError};
