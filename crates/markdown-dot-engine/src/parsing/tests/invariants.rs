use std::collections::HashSet;

use crate::tree::{BlockType, Dot, NodeKind, ProcessingState};

/// Validates a processed tree.
///
/// Asserts that:
/// - Every reachable node has exactly one owner and a matching parent id
/// - No reachable node is still raw or marked for removal
/// - Only the root has `NodeKind::Root` and it carries no block type
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(dot: &Dot) {
    let root = dot.root();
    assert_eq!(dot.node(root).kind, NodeKind::Root, "root has wrong kind");
    assert_eq!(dot.node(root).block, BlockType::None, "root has a block type");
    assert_eq!(dot.parent(root), None, "root has a parent");

    let mut seen = HashSet::new();
    for id in dot.walk() {
        assert!(seen.insert(id), "node {id:?} reachable twice");
        let node = dot.node(id);
        assert_ne!(node.kind, NodeKind::Raw, "node {id:?} left unclassified");
        assert_eq!(
            node.state,
            ProcessingState::None,
            "node {id:?} still carries a processing marker"
        );
        if id != root {
            assert_ne!(node.kind, NodeKind::Root, "second root at {id:?}");
        }
        for &child in node.children() {
            assert_eq!(
                dot.parent(child),
                Some(id),
                "child {child:?} does not point back at {id:?}"
            );
        }
    }
}

/// Input lines represented by the top-level blocks.
///
/// Containers stand for one line per line-child; every other block stands
/// for its own single line. Fence lines of code blocks are not counted.
pub fn represented_lines(dot: &Dot) -> usize {
    dot.children(dot.root())
        .iter()
        .map(|&id| {
            let node = dot.node(id);
            match node.block {
                BlockType::OrderedList
                | BlockType::UnorderedList
                | BlockType::Quote
                | BlockType::CodeBlock => node.children().len(),
                _ => 1,
            }
        })
        .sum()
}
