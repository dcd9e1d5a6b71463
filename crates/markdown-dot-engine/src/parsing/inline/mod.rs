//! # Inline Pattern Resolution
//!
//! Splits node text into styled spans using an ordered list of rules.
//!
//! ## Rule Shape
//!
//! Every rule is a regular expression with three named zones:
//! `pre`, `body` and `post`. Extra named groups can be mapped onto
//! attributes of the new span (link target, image source).
//!
//! On a match the node's text is cleared and the node gains, in order:
//! a `Text` child for `pre` (if non-empty), a child of the rule's target
//! block type holding `body`, and a `Text` child for `post` (if non-empty).
//!
//! ## Traversal
//!
//! Each rule runs once against a node and then against every child,
//! recursively, before the next rule starts. There is no fixed-point loop.
//!
//! ## Modules
//!
//! - **`kinds`**: the built-in span syntaxes (emphasis, code spans, links)

pub mod kinds;

use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::error::{RuleError, compile, require_group};
use crate::tree::{AttrKey, BlockType, Dot, Node, NodeId, NodeKind};

use kinds::{CodeSpan, Emphasis, LinkLike};

/// One inline span rule.
#[derive(Debug, Clone)]
pub struct InlineRule {
    name: String,
    pattern: Regex,
    target: BlockType,
    captures: Vec<(String, AttrKey)>,
}

impl InlineRule {
    /// Compiles a rule; the pattern must declare `pre`, `body` and `post`.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        target: BlockType,
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let pattern = compile(&name, pattern)?;
        for group in ["pre", "body", "post"] {
            require_group(&name, &pattern, group)?;
        }
        Ok(Self {
            name,
            pattern,
            target,
            captures: Vec::new(),
        })
    }

    /// Maps the named `group` onto attribute `key` of the new span.
    pub fn capture(mut self, group: &str, key: AttrKey) -> Result<Self, RuleError> {
        require_group(&self.name, &self.pattern, group)?;
        self.captures.push((group.to_string(), key));
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> BlockType {
        self.target
    }

    /// Splits the text of `id` if it matches. Children are not visited.
    ///
    /// Returns whether the node was split.
    pub fn split(&self, dot: &mut Dot, id: NodeId) -> bool {
        let node = dot.node(id);
        if node.text.is_empty() {
            return false;
        }
        let Some(caps) = self.pattern.captures(&node.text) else {
            return false;
        };

        let zone = |group: &str| caps.name(group).map_or("", |m| m.as_str()).to_string();
        let pre = zone("pre");
        let post = zone("post");
        let mut span = Node::text(self.target, zone("body"));
        for (group, key) in &self.captures {
            if let Some(m) = caps.name(group)
                && !m.as_str().is_empty()
            {
                span.attributes.set(key, m.as_str());
            }
        }

        let node = dot.node_mut(id);
        node.text.clear();
        if node.kind != NodeKind::Root {
            node.kind = NodeKind::Node;
        }
        if !pre.is_empty() {
            dot.push_child(id, Node::text(BlockType::Text, pre));
        }
        dot.push_child(id, span);
        if !post.is_empty() {
            dot.push_child(id, Node::text(BlockType::Text, post));
        }
        log::trace!("inline rule '{}' split node {}", self.name, id.index());
        true
    }

    /// Splits `id` and then every descendant, depth first.
    pub fn apply(&self, dot: &mut Dot, id: NodeId) {
        self.split(dot, id);
        let children = dot.children(id).to_vec();
        for child in children {
            self.apply(dot, child);
        }
    }
}

/// Ordered inline rules.
#[derive(Debug, Clone)]
pub struct InlineRuleSet {
    rules: Vec<InlineRule>,
}

impl InlineRuleSet {
    pub fn new(rules: Vec<InlineRule>) -> Self {
        Self { rules }
    }

    /// No inline styling at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Bold, italics, inline code, image, link; in that order.
    ///
    /// Image comes before link because `![alt](src)` also reads as a link
    /// preceded by `!`.
    pub fn markdown() -> Self {
        static RULES: OnceLock<InlineRuleSet> = OnceLock::new();
        RULES
            .get_or_init(|| {
                Self::built_in().expect("built-in inline patterns are valid")
            })
            .clone()
    }

    fn built_in() -> Result<Self, RuleError> {
        Ok(Self::new(vec![
            Emphasis::bold()?,
            Emphasis::italic()?,
            CodeSpan::rule()?,
            LinkLike::image()?,
            LinkLike::link()?,
        ]))
    }

    pub fn rules(&self) -> &[InlineRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule, in order, over `id` and its descendants.
    pub fn resolve(&self, dot: &mut Dot, id: NodeId) {
        for rule in &self.rules {
            rule.apply(dot, id);
        }
    }
}

impl Default for InlineRuleSet {
    fn default() -> Self {
        Self::markdown()
    }
}
