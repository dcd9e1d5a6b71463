use crate::parsing::blocks::{BlockRecognizer, Capture};
use crate::parsing::error::RuleError;
use crate::tree::{AttrKey, BlockType};

/// Fenced code block: everything up to the closing fence, verbatim.
pub struct CodeFence;

impl CodeFence {
    pub const OPEN: &'static str = r"^\s*```(?P<lang>[^`\s]*)(?:\s+(?P<text>.*))?$";
    pub const CLOSE: &'static str = r"^\s*```\s*$";

    pub fn recognizer() -> Result<BlockRecognizer, RuleError> {
        Ok(BlockRecognizer::new("code")
            .opening(Self::OPEN, BlockType::CodeBlock)?
            .terminated_by(Self::CLOSE)?
            .lines(BlockType::CodeLine)
            .capture("lang", Capture::Attr(AttrKey::Lang))
            .verbatim())
    }
}
