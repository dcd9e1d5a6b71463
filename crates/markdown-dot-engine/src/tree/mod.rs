//! # Document Object Tree
//!
//! The in-memory tree built from raw input lines.
//!
//! ## Ownership
//!
//! All nodes live in an arena owned by [`Dot`] and are addressed by
//! [`NodeId`]. A node is owned by exactly one parent through that parent's
//! `children` list; `parent` is a plain id used for upward lookups only.
//! Nodes that get replaced or removed stay in the arena detached from the
//! root and are never reached by a walk.
//!
//! ## Lifecycle
//!
//! 1. Every input line becomes a [`NodeKind::Raw`] leaf under the root.
//! 2. Block recognizers replace raw lines with classified nodes and mark
//!    absorbed siblings with [`ProcessingState::MarkedForRemoval`].
//! 3. [`Dot::cleanup`] drops the marked siblings.
//! 4. Inline rules split node text into styled children.
//! 5. The renderer reads the finished tree.

pub mod attributes;
pub mod outline;

use serde::Serialize;

pub use attributes::{AttrKey, Attributes, Values};

/// Index of a node in the [`Dot`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Structural role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Root,
    /// An input line no recognizer has claimed yet.
    Raw,
    /// A leaf carrying text.
    Text,
    /// A container.
    Node,
}

/// Semantic role of a node, drives the render rule lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockType {
    None,
    Paragraph,
    Heading,
    CodeBlock,
    CodeLine,
    OrderedList,
    UnorderedList,
    ListItem,
    Quote,
    Table,
    Task,
    Bold,
    Italic,
    Underline,
    Link,
    Image,
    InlineCode,
    Text,
}

/// Transient marker used while block recognition runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ProcessingState {
    #[default]
    None,
    MarkedForRemoval,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub block: BlockType,
    pub state: ProcessingState,
    pub attributes: Attributes,
    pub values: Values,
    pub text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    pub fn new(kind: NodeKind, block: BlockType, text: impl Into<String>) -> Self {
        Self {
            kind,
            block,
            state: ProcessingState::None,
            attributes: Attributes::default(),
            values: Values::default(),
            text: text.into(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// An unclassified input line.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Raw, BlockType::None, text)
    }

    /// A text leaf of the given block type.
    pub fn text(block: BlockType, text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text, block, text)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_marked_for_removal(&self) -> bool {
        self.state == ProcessingState::MarkedForRemoval
    }
}

/// Document Object Tree: the arena plus its root.
#[derive(Debug, Clone)]
pub struct Dot {
    nodes: Vec<Node>,
}

impl Dot {
    const ROOT: NodeId = NodeId(0);

    /// Creates a tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root, BlockType::None, "")],
        }
    }

    /// Builds a flat tree with one raw node per line, in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dot = Self::new();
        for line in lines {
            let id = dot.alloc(Node::raw(line));
            dot.append_child(Self::ROOT, id);
        }
        dot
    }

    /// Splits `input` into lines (`\n` or `\r\n`) and builds a flat tree.
    pub fn from_text(input: &str) -> Self {
        Self::from_lines(input.lines())
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Iterates from the parent of `id` up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Stores a detached node and returns its id.
    pub fn alloc(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        node.children.clear();
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Appends a detached node to `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.nodes[child.0].parent.is_none(),
            "node {child:?} already has a parent"
        );
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Allocates `node` and appends it to `parent`.
    pub fn push_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.alloc(node);
        self.append_child(parent, id);
        id
    }

    /// Puts `child` in slot `index` of `parent`, detaching the previous
    /// occupant, which is returned.
    pub fn replace_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> NodeId {
        let old = std::mem::replace(&mut self.nodes[parent.0].children[index], child);
        self.nodes[old.0].parent = None;
        self.nodes[child.0].parent = Some(parent);
        old
    }

    /// Detaches and returns the child at `index`.
    pub fn remove_child(&mut self, parent: NodeId, index: usize) -> NodeId {
        let old = self.nodes[parent.0].children.remove(index);
        self.nodes[old.0].parent = None;
        old
    }

    pub fn mark_for_removal(&mut self, id: NodeId) {
        self.nodes[id.0].state = ProcessingState::MarkedForRemoval;
    }

    /// Deep-copies the subtree at `id` into fresh, detached nodes.
    ///
    /// A copied node without a block type becomes [`BlockType::Text`], and
    /// the copy carries no processing marker.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let mut copy = self.nodes[id.0].clone();
        if copy.block == BlockType::None {
            copy.block = BlockType::Text;
        }
        copy.state = ProcessingState::None;
        let children = std::mem::take(&mut copy.children);
        let new_id = self.alloc(copy);
        for child in children {
            let child_copy = self.clone_subtree(child);
            self.append_child(new_id, child_copy);
        }
        new_id
    }

    /// Drops the children of `parent` that are marked for removal.
    ///
    /// Returns how many were removed; a second call removes nothing.
    pub fn cleanup(&mut self, parent: NodeId) -> usize {
        let (keep, drop): (Vec<NodeId>, Vec<NodeId>) = self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .partition(|&c| !self.nodes[c.0].is_marked_for_removal());
        for id in &drop {
            self.nodes[id.0].parent = None;
        }
        self.nodes[parent.0].children = keep;
        drop.len()
    }

    /// Pre-order walk over every node reachable from the root.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// Total arena size, including detached nodes.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new()
    }
}
