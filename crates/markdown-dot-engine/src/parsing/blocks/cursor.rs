use crate::tree::{Dot, Node, NodeId};

/// Read-only view of a sibling sequence positioned at one line.
///
/// The driver hands this to a recognizer so it can look ahead without
/// touching the sequence it is walking.
#[derive(Clone, Copy)]
pub struct LineCursor<'a> {
    dot: &'a Dot,
    parent: NodeId,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(dot: &'a Dot, parent: NodeId, position: usize) -> Self {
        Self {
            dot,
            parent,
            position,
        }
    }

    /// The node at the cursor.
    pub fn current(&self) -> NodeId {
        self.dot.children(self.parent)[self.position]
    }

    /// Siblings after the cursor, in order.
    pub fn following(&self) -> impl Iterator<Item = (NodeId, &'a Node)> + 'a {
        let dot = self.dot;
        dot.children(self.parent)[self.position + 1..]
            .iter()
            .map(move |&id| (id, dot.node(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn following_starts_after_cursor() {
        let dot = Dot::from_lines(["a", "b", "c"]);
        let cursor = LineCursor::new(&dot, dot.root(), 1);

        let texts: Vec<_> = cursor.following().map(|(_, n)| n.text.as_str()).collect();
        assert_eq!(texts, vec!["c"]);
        assert_eq!(dot.node(cursor.current()).text, "b");
    }

    #[test]
    fn following_is_empty_at_last_line() {
        let dot = Dot::from_lines(["only"]);
        let cursor = LineCursor::new(&dot, dot.root(), 0);
        assert_eq!(cursor.following().count(), 0);
    }
}
