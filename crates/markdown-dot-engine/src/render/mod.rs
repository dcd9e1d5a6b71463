//! # HTML Rendering
//!
//! Walks a processed [`Dot`] once and produces markup. The renderer never
//! mutates the tree.
//!
//! Each [`BlockType`] maps to a [`RenderRule`]: the tag to wrap with (if
//! any), whether the tag is block-level, whether children go one per line,
//! and a small [`Strategy`] for the kinds that need special handling.

pub mod escape;
pub mod shell;

use std::borrow::Cow;

pub use escape::{escape_attribute, escape_text};
pub use shell::Shell;

use crate::tree::{Attributes, BlockType, Dot, NodeId};

/// Tag a block type renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// No wrapper: text and children are emitted inline.
    None,
    Fixed(&'static str),
    /// `h1`..`h6` from the node's level.
    Heading,
}

/// Per-kind rendering differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Plain,
    /// Tag name comes from the level value.
    Heading,
    /// Text becomes the `alt` attribute instead of the body.
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRule {
    pub tag: Tag,
    /// Closing tag is followed by a line break.
    pub block: bool,
    /// Each child is followed by a line break.
    pub child_lines: bool,
    pub strategy: Strategy,
}

impl RenderRule {
    const fn inline(tag: &'static str) -> Self {
        Self {
            tag: Tag::Fixed(tag),
            block: false,
            child_lines: false,
            strategy: Strategy::Plain,
        }
    }

    const fn block(tag: &'static str) -> Self {
        Self {
            tag: Tag::Fixed(tag),
            block: true,
            child_lines: false,
            strategy: Strategy::Plain,
        }
    }

    const fn bare() -> Self {
        Self {
            tag: Tag::None,
            block: false,
            child_lines: false,
            strategy: Strategy::Plain,
        }
    }

    const fn lines(mut self) -> Self {
        self.child_lines = true;
        self
    }

    /// The rule for `block`, or `None` for kinds that are not rendered.
    pub const fn for_block(block: BlockType) -> Option<Self> {
        let rule = match block {
            BlockType::None => return None,
            BlockType::Bold => Self::inline("strong"),
            BlockType::Italic => Self::inline("i"),
            BlockType::Underline => Self::inline("u"),
            BlockType::Link => Self::inline("a"),
            BlockType::InlineCode => Self::inline("code"),
            BlockType::Image => Self {
                tag: Tag::Fixed("img"),
                block: false,
                child_lines: false,
                strategy: Strategy::Image,
            },
            BlockType::Heading => Self {
                tag: Tag::Heading,
                block: true,
                child_lines: false,
                strategy: Strategy::Heading,
            },
            BlockType::Paragraph => Self::block("p"),
            BlockType::ListItem => Self::block("li"),
            BlockType::OrderedList => Self::block("ol"),
            BlockType::UnorderedList => Self::block("ul"),
            BlockType::CodeBlock => Self::block("pre").lines(),
            BlockType::Quote => Self::block("blockquote").lines(),
            BlockType::CodeLine | BlockType::Text | BlockType::Table | BlockType::Task => {
                Self::bare()
            }
        };
        Some(rule)
    }
}

impl Tag {
    /// Tag name, with `level` used for headings.
    pub fn name(self, level: Option<u8>) -> Option<Cow<'static, str>> {
        match self {
            Tag::None => None,
            Tag::Fixed(name) => Some(Cow::Borrowed(name)),
            Tag::Heading => Some(Cow::Owned(format!("h{}", level.unwrap_or(1)))),
        }
    }
}

/// Renders a processed tree to HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Body markup only.
    pub fn render_fragment(&self, dot: &Dot) -> String {
        let mut out = String::new();
        for &child in dot.children(dot.root()) {
            self.render_node(dot, child, &mut out);
        }
        out
    }

    /// Body markup inside `shell`.
    pub fn render_document(&self, dot: &Dot, shell: &Shell) -> String {
        shell.wrap(&self.render_fragment(dot))
    }

    fn render_node(&self, dot: &Dot, id: NodeId, out: &mut String) {
        let node = dot.node(id);
        let Some(rule) = RenderRule::for_block(node.block) else {
            log::trace!("skipping node {} with no block type", id.index());
            return;
        };

        let mut body = String::new();
        if rule.strategy != Strategy::Image && !node.text.is_empty() {
            body.push_str(&escape_text(&node.text));
        }
        for &child in node.children() {
            self.render_node(dot, child, &mut body);
            if rule.child_lines {
                body.push('\n');
            }
        }

        let level = match rule.strategy {
            Strategy::Heading => node.values.level,
            _ => None,
        };
        let Some(tag) = rule.tag.name(level) else {
            out.push_str(&body);
            return;
        };

        let attributes = match rule.strategy {
            Strategy::Image if !node.text.is_empty() => {
                let mut attributes = node.attributes.clone();
                attributes.alt = Some(node.text.clone());
                Cow::Owned(attributes)
            }
            _ => Cow::Borrowed(&node.attributes),
        };

        out.push('<');
        out.push_str(&tag);
        out.push_str(&attribute_string(&attributes));
        out.push('>');
        out.push_str(&body);
        out.push_str("</");
        out.push_str(&tag);
        out.push('>');
        if rule.block {
            out.push('\n');
        }
    }
}

/// ` key="value"` pairs in render order; empty when there are none.
fn attribute_string(attributes: &Attributes) -> String {
    attributes
        .pairs()
        .into_iter()
        .map(|(key, value)| format!(" {key}=\"{}\"", escape_attribute(&value)))
        .collect()
}
