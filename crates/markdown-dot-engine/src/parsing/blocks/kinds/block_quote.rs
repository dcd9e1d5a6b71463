use crate::parsing::blocks::BlockRecognizer;
use crate::parsing::error::RuleError;
use crate::tree::BlockType;

pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    pub const LINE: &'static str = r"^\s?>\s?(?P<text>.*)$";

    pub fn recognizer() -> Result<BlockRecognizer, RuleError> {
        Ok(BlockRecognizer::new("quote")
            .opening(Self::LINE, BlockType::Quote)?
            .continued_by(Self::LINE)?
            .lines(BlockType::Text))
    }
}
