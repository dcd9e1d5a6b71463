//! # Block Recognition
//!
//! Classifies raw lines into blocks and absorbs the lines that belong to them.
//!
//! ## Recognizers
//!
//! A [`BlockRecognizer`] owns:
//!
//! - one or more **opening** patterns, each naming the block type it makes
//! - per opening, an optional **continuation** pattern for interior lines
//! - optional **terminator** patterns that close the block
//!
//! With neither continuation nor terminator a recognizer is single-line.
//! With only terminators every following line is absorbed until one matches.
//! With a continuation the block ends at the first line that does not match;
//! that line is left for the next dispatch.
//!
//! ## Modules
//!
//! - **`cursor`**: `LineCursor`, the read-only look-ahead given to recognizers
//! - **`recognizer`**: `BlockRecognizer` and its scan state machine
//! - **`kinds`**: the built-in block syntaxes
//!
//! ## Key Invariants
//!
//! - Recognizers never change the sequence they read; they return a
//!   [`Recognition`] and the driver does the index arithmetic
//! - The first recognizer whose opening matches wins
//! - Paragraph is the catch-all and sits last

pub mod cursor;
pub mod kinds;
pub mod recognizer;

use std::sync::OnceLock;

pub use cursor::LineCursor;
pub use recognizer::{
    BlockRecognizer, Capture, Closed, Opening, OpeningMatch, Recognition, Scan, TEXT_GROUP,
};

use crate::parsing::error::RuleError;
use kinds::{BlockQuote, CodeFence, EmptyLine, Heading, List, Paragraph};

/// Block recognizers in priority order.
#[derive(Debug, Clone)]
pub struct BlockRuleSet {
    recognizers: Vec<BlockRecognizer>,
}

impl BlockRuleSet {
    pub fn new(recognizers: Vec<BlockRecognizer>) -> Self {
        Self { recognizers }
    }

    /// Code, heading, list, quote, empty line, paragraph.
    pub fn markdown() -> Self {
        static RULES: OnceLock<BlockRuleSet> = OnceLock::new();
        RULES
            .get_or_init(|| Self::built_in().expect("built-in block patterns are valid"))
            .clone()
    }

    fn built_in() -> Result<Self, RuleError> {
        Ok(Self::new(vec![
            CodeFence::recognizer()?,
            Heading::recognizer()?,
            List::recognizer()?,
            BlockQuote::recognizer()?,
            EmptyLine::recognizer()?,
            Paragraph::recognizer()?,
        ]))
    }

    pub fn recognizers(&self) -> &[BlockRecognizer] {
        &self.recognizers
    }

    /// First recognizer whose opening pattern matches `text`.
    pub fn dispatch(&self, text: &str) -> Option<(&BlockRecognizer, OpeningMatch)> {
        self.recognizers
            .iter()
            .find_map(|r| r.match_opening(text).map(|m| (r, m)))
    }
}

impl Default for BlockRuleSet {
    fn default() -> Self {
        Self::markdown()
    }
}
