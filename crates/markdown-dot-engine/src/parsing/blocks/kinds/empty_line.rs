use crate::parsing::blocks::BlockRecognizer;
use crate::parsing::error::RuleError;
use crate::tree::BlockType;

/// Whitespace-only lines. They open an empty paragraph that collapses away,
/// so runs of blank lines leave nothing behind.
pub struct EmptyLine;

impl EmptyLine {
    pub const LINE: &'static str = r"^\s*$";

    pub fn recognizer() -> Result<BlockRecognizer, RuleError> {
        Ok(BlockRecognizer::new("empty")
            .opening(Self::LINE, BlockType::Paragraph)?
            .collapse_empty())
    }
}
