//! Arena-backed syntax tree and its builder.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::{NodeId, NodeKind};

/// Errors reported while assembling a [`SyntaxTree`].
///
/// These only surface at the parser-facing construction boundary; once a
/// tree exists, walking it cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Only the root node may be tagged [`NodeKind::Stylesheet`].
    #[error("stylesheet nodes cannot have a parent")]
    NestedStylesheet,
    /// The parent id was not produced by this builder.
    #[error("parent {0} is not part of this tree")]
    UnknownParent(NodeId),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    name: Option<SmolStr>,
    range: TextRange,
    parent: Option<NodeId>,
}

/// A parsed document as an arena of nodes.
///
/// Index 0 is always the `Stylesheet` root. Parents are stored as arena
/// indices, so upward walks are bounded loops over plain array lookups.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// The root node (always a `Stylesheet`).
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The kind of a node.
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.data(node).kind
    }

    /// The name recorded for a node, if the parser recorded one.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.data(node).name.as_deref()
    }

    /// The source range of a node.
    pub fn range(&self, node: NodeId) -> TextRange {
        self.data(node).range
    }

    /// The parent of a node. `None` only for the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).parent
    }

    /// Number of nodes in the tree (at least 1, the root).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk from `node` toward the root and return the first node of `kind`,
    /// including `node` itself.
    ///
    /// The walk gives up when it hits the stylesheet root, so asking for
    /// `NodeKind::Stylesheet` always comes back negative. A negative result
    /// is a normal outcome, not an error. The loop is bounded by tree depth;
    /// the parent relation is a tree, so no cycle checks are needed.
    pub fn self_or_ancestor(&self, node: NodeId, kind: NodeKind) -> Option<NodeId> {
        let mut current = node;
        loop {
            if self.kind(current) == NodeKind::Stylesheet {
                return None;
            }
            if self.kind(current) == kind {
                return Some(current);
            }
            current = self.parent(current)?;
        }
    }

    /// The smallest node whose range contains `offset`.
    ///
    /// The end boundary is inclusive so that a cursor sitting just past the
    /// last character of a token still hits it, which is what hover wants.
    /// Host layers use this to turn a cursor offset into the node they hand
    /// to the editor features.
    pub fn node_at_offset(&self, offset: TextSize) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        for (index, data) in self.nodes.iter().enumerate() {
            if !data.range.contains_inclusive(offset) {
                continue;
            }
            let node = NodeId(index as u32);
            match best {
                None => best = Some(node),
                Some(current) => {
                    if data.range.len() < self.range(current).len() {
                        best = Some(node);
                    }
                }
            }
        }
        best
    }

    fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0 as usize]
    }
}

/// Parser-facing construction API for [`SyntaxTree`].
///
/// The builder starts from the stylesheet root and only accepts children
/// whose parent it handed out itself, which keeps the finished tree a single
/// rooted tree by construction.
///
/// ```
/// use cascade::syntax::{NodeKind, TreeBuilder};
/// use cascade::TextRange;
///
/// let mut builder = TreeBuilder::stylesheet(TextRange::new(0.into(), 20.into()));
/// let root = builder.root();
/// let decl = builder.node(root, NodeKind::Declaration, TextRange::new(0.into(), 12.into()))?;
/// builder.named(decl, NodeKind::VariableName, "color", TextRange::new(0.into(), 6.into()))?;
///
/// let tree = builder.finish();
/// assert_eq!(tree.kind(tree.root()), NodeKind::Stylesheet);
/// # Ok::<(), cascade::syntax::TreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    /// Start a tree with its stylesheet root covering `range`.
    pub fn stylesheet(range: TextRange) -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Stylesheet,
                name: None,
                range,
                parent: None,
            }],
        }
    }

    /// The root node id, for attaching top-level children.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Add an unnamed node under `parent`.
    pub fn node(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        range: TextRange,
    ) -> Result<NodeId, TreeError> {
        self.push(parent, kind, None, range)
    }

    /// Add a named node under `parent`.
    pub fn named(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: impl Into<SmolStr>,
        range: TextRange,
    ) -> Result<NodeId, TreeError> {
        self.push(parent, kind, Some(name.into()), range)
    }

    /// Finish the tree. Infallible: the invariants are checked on insertion.
    pub fn finish(self) -> SyntaxTree {
        SyntaxTree { nodes: self.nodes }
    }

    fn push(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: Option<SmolStr>,
        range: TextRange,
    ) -> Result<NodeId, TreeError> {
        if kind == NodeKind::Stylesheet {
            return Err(TreeError::NestedStylesheet);
        }
        if parent.0 as usize >= self.nodes.len() {
            return Err(TreeError::UnknownParent(parent));
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            name,
            range,
            parent: Some(parent),
        });
        Ok(id)
    }
}
