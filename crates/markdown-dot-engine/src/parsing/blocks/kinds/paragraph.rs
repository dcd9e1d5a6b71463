use crate::parsing::blocks::BlockRecognizer;
use crate::parsing::error::RuleError;
use crate::tree::BlockType;

/// Paragraph: the catch-all for any non-empty line. Must be tried last.
pub struct Paragraph;

impl Paragraph {
    pub const LINE: &'static str = r"^(?P<text>.+)$";

    pub fn recognizer() -> Result<BlockRecognizer, RuleError> {
        BlockRecognizer::new("paragraph").opening(Self::LINE, BlockType::Paragraph)
    }
}
