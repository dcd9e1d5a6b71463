//! # Parsing
//!
//! Turns a flat list of raw lines into a block-structured, inline-resolved
//! [`Dot`].
//!
//! ## Pipeline
//!
//! 1. **Dispatch**: walk the root's children by index; offer each raw line
//!    to the block recognizers in priority order
//! 2. **Replace**: swap the raw line for the recognizer's new block node and
//!    mark the absorbed siblings for removal
//! 3. **Advance**: move the cursor past the opening line and everything the
//!    recognizer consumed; a line it declined is dispatched next
//! 4. **Cleanup**: drop the marked siblings once the walk is done
//!
//! Inline rules run inside step 2, per block, as each recognizer finishes.

pub mod blocks;
pub mod error;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{BlockRuleSet, Recognition};
use inline::InlineRuleSet;

use crate::tree::{BlockType, Dot, Node, NodeKind};

pub use error::RuleError;

/// Block and inline rules plus the driver that applies them.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    blocks: BlockRuleSet,
    inline: InlineRuleSet,
}

impl Pipeline {
    pub fn new(blocks: BlockRuleSet, inline: InlineRuleSet) -> Self {
        Self { blocks, inline }
    }

    /// The built-in Markdown rules.
    pub fn markdown() -> Self {
        Self::new(BlockRuleSet::markdown(), InlineRuleSet::markdown())
    }

    pub fn blocks(&self) -> &BlockRuleSet {
        &self.blocks
    }

    pub fn inline(&self) -> &InlineRuleSet {
        &self.inline
    }

    /// Classifies every raw child of the root, then cleans up.
    pub fn process(&self, dot: &mut Dot) {
        let root = dot.root();
        let mut index = 0;

        while index < dot.children(root).len() {
            let id = dot.children(root)[index];
            if dot.node(id).kind != NodeKind::Raw {
                index += 1;
                continue;
            }

            let text = dot.node(id).text.clone();
            let recognition = match self.blocks.dispatch(&text) {
                Some((recognizer, opened)) => {
                    recognizer.recognize(dot, root, index, &opened, &self.inline)
                }
                None => self.fallback(dot, index),
            };

            self.settle(dot, index, recognition);
            index += 1 + recognition.consumed;
        }

        let removed = dot.cleanup(root);
        log::debug!(
            "block pass done: {} blocks, {removed} absorbed lines removed",
            dot.children(root).len()
        );
    }

    /// Puts the new block in place of its opening line and marks what it
    /// absorbed.
    fn settle(&self, dot: &mut Dot, index: usize, recognition: Recognition) {
        let root = dot.root();
        dot.replace_child(root, index, recognition.node);
        if recognition.collapse {
            dot.mark_for_removal(recognition.node);
        }
        for offset in 1..=recognition.consumed {
            let sibling = dot.children(root)[index + offset];
            dot.mark_for_removal(sibling);
        }
    }

    /// Paragraph for a line no recognizer claimed.
    fn fallback(&self, dot: &mut Dot, index: usize) -> Recognition {
        let root = dot.root();
        let source = dot.children(root)[index];
        log::warn!("no block rule matched line {index}, treating it as a paragraph");

        let text = dot.node(source).text.clone();
        let node = dot.alloc(Node::new(NodeKind::Node, BlockType::Paragraph, text));
        self.inline.resolve(dot, node);
        Recognition {
            node,
            consumed: 0,
            collapse: false,
        }
    }

    /// Builds and processes a tree from `lines`.
    pub fn parse_lines<I, S>(&self, lines: I) -> Dot
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dot = Dot::from_lines(lines);
        self.process(&mut dot);
        dot
    }

    /// Builds and processes a tree from a whole document.
    pub fn parse_str(&self, input: &str) -> Dot {
        let mut dot = Dot::from_text(input);
        self.process(&mut dot);
        dot
    }
}

/// Parses `lines` with the built-in rules.
pub fn parse_lines<I, S>(lines: I) -> Dot
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Pipeline::markdown().parse_lines(lines)
}

/// Parses a whole document with the built-in rules.
pub fn parse_str(input: &str) -> Dot {
    Pipeline::markdown().parse_str(input)
}
