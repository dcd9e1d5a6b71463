use regex::{Captures, Regex};

use crate::parsing::error::{RuleError, compile};
use crate::parsing::inline::InlineRuleSet;
use crate::tree::{AttrKey, BlockType, Dot, Node, NodeId, NodeKind};

use super::cursor::LineCursor;

/// Named group holding a line's body text.
pub const TEXT_GROUP: &str = "text";

/// Where a captured group ends up on the block node.
#[derive(Debug, Clone, PartialEq)]
pub enum Capture {
    Attr(AttrKey),
    /// Heading level: the character count of the captured run.
    Level,
}

/// An opening pattern and the block kind it produces.
#[derive(Debug, Clone)]
pub struct Opening {
    pattern: Regex,
    block: BlockType,
    /// Lines that keep the block open. Its `text` group becomes the line.
    continuation: Option<Regex>,
}

/// What an opening pattern pulled out of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningMatch {
    pub opening: usize,
    pub text: Option<String>,
    pub attributes: Vec<(AttrKey, String)>,
    pub level: Option<u8>,
}

/// Result of running a recognizer at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognition {
    /// Freshly built, detached block node.
    pub node: NodeId,
    /// Following siblings absorbed (continuations and the terminator).
    pub consumed: usize,
    /// The block came out empty and should be dropped.
    pub collapse: bool,
}

/// How a multi-line scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closed {
    Terminator,
    /// The next line belongs to someone else and is left for re-dispatch.
    NonMatch,
    EndOfInput,
}

#[derive(Debug)]
enum LineClass {
    Terminator,
    Continuation(String),
    Outside,
}

/// Lines claimed by a multi-line block, before any node is built.
#[derive(Debug)]
pub struct Scan {
    pub lines: Vec<(NodeId, String)>,
    pub consumed: usize,
    pub closed: Closed,
}

/// Recognizes one block kind from its opening line and absorbs the lines
/// that belong to it.
#[derive(Debug, Clone)]
pub struct BlockRecognizer {
    name: String,
    openings: Vec<Opening>,
    terminators: Vec<Regex>,
    line_block: BlockType,
    captures: Vec<(String, Capture)>,
    inline: bool,
    collapse_empty: bool,
}

impl BlockRecognizer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            openings: Vec::new(),
            terminators: Vec::new(),
            line_block: BlockType::Text,
            captures: Vec::new(),
            inline: true,
            collapse_empty: false,
        }
    }

    /// Adds an opening pattern producing `block`.
    pub fn opening(mut self, pattern: &str, block: BlockType) -> Result<Self, RuleError> {
        let pattern = compile(&self.name, pattern)?;
        self.openings.push(Opening {
            pattern,
            block,
            continuation: None,
        });
        Ok(self)
    }

    /// Sets the continuation pattern of the most recent opening.
    pub fn continued_by(mut self, pattern: &str) -> Result<Self, RuleError> {
        let pattern = compile(&self.name, pattern)?;
        let Some(last) = self.openings.last_mut() else {
            return Err(RuleError::NoOpening(self.name));
        };
        last.continuation = Some(pattern);
        Ok(self)
    }

    /// Adds a pattern that closes the block; the closing line is dropped.
    pub fn terminated_by(mut self, pattern: &str) -> Result<Self, RuleError> {
        let pattern = compile(&self.name, pattern)?;
        self.terminators.push(pattern);
        Ok(self)
    }

    /// Block type given to absorbed line-children.
    pub fn lines(mut self, block: BlockType) -> Self {
        self.line_block = block;
        self
    }

    pub fn capture(mut self, group: &str, target: Capture) -> Self {
        self.captures.push((group.to_string(), target));
        self
    }

    /// Keeps line text verbatim: no inline rules run on this block.
    pub fn verbatim(mut self) -> Self {
        self.inline = false;
        self
    }

    /// Drops the block when it ends up with no text and no children.
    pub fn collapse_empty(mut self) -> Self {
        self.collapse_empty = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_block(&self) -> BlockType {
        self.line_block
    }

    /// Whether the given opening keeps reading lines after itself.
    pub fn is_multiline(&self, opening: usize) -> bool {
        self.openings
            .get(opening)
            .is_some_and(|o| o.continuation.is_some())
            || !self.terminators.is_empty()
    }

    /// Tries each opening pattern in order against `text`.
    pub fn match_opening(&self, text: &str) -> Option<OpeningMatch> {
        self.openings.iter().enumerate().find_map(|(i, o)| {
            let caps = o.pattern.captures(text)?;
            Some(self.extract(i, &caps))
        })
    }

    fn extract(&self, opening: usize, caps: &Captures<'_>) -> OpeningMatch {
        let mut attributes = Vec::new();
        let mut level = None;
        for (group, target) in &self.captures {
            let Some(m) = caps.name(group) else {
                continue;
            };
            if m.as_str().is_empty() {
                continue;
            }
            match target {
                Capture::Attr(key) => attributes.push((key.clone(), m.as_str().to_string())),
                Capture::Level => {
                    level = Some(u8::try_from(m.as_str().chars().count()).unwrap_or(u8::MAX));
                }
            }
        }
        OpeningMatch {
            opening,
            text: caps.name(TEXT_GROUP).map(|m| m.as_str().to_string()),
            attributes,
            level,
        }
    }

    fn classify(&self, opening: &Opening, node: &Node) -> LineClass {
        if node.kind != NodeKind::Raw {
            return LineClass::Outside;
        }
        let text = node.text.as_str();
        if self.terminators.iter().any(|t| t.is_match(text)) {
            return LineClass::Terminator;
        }
        match &opening.continuation {
            Some(pattern) => match pattern.captures(text) {
                Some(caps) => LineClass::Continuation(
                    caps.name(TEXT_GROUP)
                        .map_or_else(|| text.to_string(), |m| m.as_str().to_string()),
                ),
                None => LineClass::Outside,
            },
            // Only terminators: everything up to one is part of the block.
            None => LineClass::Continuation(text.to_string()),
        }
    }

    /// Reads following lines until the block closes.
    pub fn scan(&self, cursor: &LineCursor<'_>, opened: &OpeningMatch) -> Scan {
        let mut scan = Scan {
            lines: Vec::new(),
            consumed: 0,
            closed: Closed::EndOfInput,
        };
        if !self.is_multiline(opened.opening) {
            scan.closed = Closed::NonMatch;
            return scan;
        }
        let opening = &self.openings[opened.opening];
        for (id, node) in cursor.following() {
            match self.classify(opening, node) {
                LineClass::Terminator => {
                    scan.consumed += 1;
                    scan.closed = Closed::Terminator;
                    break;
                }
                LineClass::Continuation(text) => {
                    scan.consumed += 1;
                    scan.lines.push((id, text));
                }
                LineClass::Outside => {
                    scan.closed = Closed::NonMatch;
                    break;
                }
            }
        }
        scan
    }

    /// Builds the classified block for the line at `position` under `parent`.
    ///
    /// The opening line and every absorbed line are cloned; the originals
    /// stay where they are for the driver to replace or mark.
    pub fn recognize(
        &self,
        dot: &mut Dot,
        parent: NodeId,
        position: usize,
        opened: &OpeningMatch,
        inline: &InlineRuleSet,
    ) -> Recognition {
        let cursor = LineCursor::new(dot, parent, position);
        let source = cursor.current();
        let scan = self.scan(&cursor, opened);

        let multiline = self.is_multiline(opened.opening);
        let block = dot.clone_subtree(source);
        {
            let node = dot.node_mut(block);
            node.kind = NodeKind::Node;
            node.block = self.openings[opened.opening].block;
            node.text.clear();
            for (key, value) in &opened.attributes {
                node.attributes.set(key, value);
            }
            if opened.level.is_some() {
                node.values.level = opened.level;
            }
        }

        // A continued block's opening line is a line like any other, even
        // when empty; elsewhere empty opening text adds nothing.
        let continued = self.openings[opened.opening].continuation.is_some();
        match opened.text.as_deref() {
            Some(text) if continued => {
                dot.push_child(block, Node::text(self.line_block, text));
            }
            Some(text) if !text.is_empty() => {
                if multiline {
                    dot.push_child(block, Node::text(self.line_block, text));
                } else {
                    dot.node_mut(block).text = text.to_string();
                }
            }
            _ => {}
        }

        for (sibling, text) in scan.lines {
            let line = dot.clone_subtree(sibling);
            let node = dot.node_mut(line);
            node.kind = NodeKind::Text;
            node.block = self.line_block;
            node.text = text;
            dot.append_child(block, line);
        }

        if self.inline {
            inline.resolve(dot, block);
        }

        let node = dot.node(block);
        let collapse = self.collapse_empty && node.text.is_empty() && !node.has_children();
        log::debug!(
            "{} recognized line {position} as {:?}, absorbed {} ({:?})",
            self.name,
            node.block,
            scan.consumed,
            scan.closed
        );

        Recognition {
            node: block,
            consumed: scan.consumed,
            collapse,
        }
    }
}
