use std::fmt;
use std::ops::Range;

use super::kind::{Field, SyntaxKind};
use crate::domain::TextSpan;

/// Index of a node inside its owning [`SyntaxTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: SyntaxKind,
    field: Option<Field>,
    range: Range<usize>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Read-only typed syntax tree for a single source file.
///
/// Nodes live in an arena; the tree owns them and hands out borrowed
/// [`SyntaxNode`] handles.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    file_name: String,
    text: String,
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        self.node(NodeId::ROOT)
    }

    pub fn node(&self, id: NodeId) -> SyntaxNode<'_> {
        SyntaxNode { tree: self, id }
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in pre-order (source order).
    pub fn descendants(&self) -> impl Iterator<Item = SyntaxNode<'_>> {
        let mut stack = vec![NodeId::ROOT];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.data(id).children.iter().rev().copied());
            Some(self.node(id))
        })
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Borrowed handle to one node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> SyntaxNode<'t> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    pub fn field(self) -> Option<Field> {
        self.data().field
    }

    pub fn start(self) -> usize {
        self.data().range.start
    }

    pub fn end(self) -> usize {
        self.data().range.end
    }

    pub fn span(self) -> TextSpan {
        TextSpan::from_range(self.data().range.clone())
    }

    /// Whether `offset` lies in the half-open span `[start, end)`.
    pub fn contains(self, offset: usize) -> bool {
        self.data().range.contains(&offset)
    }

    pub fn text(self) -> &'t str {
        self.tree
            .text
            .get(self.data().range.clone())
            .unwrap_or_default()
    }

    pub fn parent(self) -> Option<SyntaxNode<'t>> {
        self.data().parent.map(|id| self.tree.node(id))
    }

    pub fn children(self) -> impl Iterator<Item = SyntaxNode<'t>> + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| tree.node(id))
    }

    pub fn child_by_field(self, field: Field) -> Option<SyntaxNode<'t>> {
        self.children().find(|child| child.field() == Some(field))
    }

    pub fn children_by_field(self, field: Field) -> impl Iterator<Item = SyntaxNode<'t>> + 't {
        self.children()
            .filter(move |child| child.field() == Some(field))
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'t>> + 't {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    fn data(self) -> &'t NodeData {
        self.tree.data(self.id)
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.kind(), self.start(), self.end())
    }
}

/// Incrementally assembles a [`SyntaxTree`].
///
/// The root spans the whole text. Children must be pushed in source order.
pub struct TreeBuilder {
    file_name: String,
    text: String,
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>, root: SyntaxKind) -> Self {
        let text = text.into();
        let root = NodeData {
            kind: root,
            field: None,
            range: 0..text.len(),
            parent: None,
            children: Vec::new(),
        };
        Self {
            file_name: file_name.into(),
            text,
            nodes: vec![root],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push(
        &mut self,
        parent: NodeId,
        kind: SyntaxKind,
        field: Option<Field>,
        range: Range<usize>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            field,
            range,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn finish(self) -> SyntaxTree {
        SyntaxTree {
            file_name: self.file_name,
            text: self.text,
            nodes: self.nodes,
        }
    }
}
