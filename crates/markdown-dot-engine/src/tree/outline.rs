use std::fmt::Write;

use super::{Dot, NodeId};

impl Dot {
    /// Human-readable dump of the reachable tree, one node per line.
    ///
    /// Each line reads `path> - kind - block - text - attrs`, where `path`
    /// is the dotted child index from the root (`0`, `0.1`, ...).
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for (i, &child) in self.children(self.root()).iter().enumerate() {
            self.outline_node(&mut out, child, &i.to_string(), 0);
        }
        out
    }

    fn outline_node(&self, out: &mut String, id: NodeId, path: &str, depth: usize) {
        let node = self.node(id);
        let attrs = node
            .attributes
            .pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            "{}{path}> - {:?} - {:?} - {} - {attrs}",
            "  ".repeat(depth),
            node.kind,
            node.block,
            node.text,
        );
        for (i, &child) in node.children().iter().enumerate() {
            self.outline_node(out, child, &format!("{path}.{i}"), depth + 1);
        }
    }
}
