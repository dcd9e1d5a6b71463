use crate::parsing::blocks::{BlockRecognizer, Capture};
use crate::parsing::error::RuleError;
use crate::tree::{AttrKey, BlockType};

/// Ordered (`1. item`) and unordered (`- item`) lists.
///
/// A list keeps going while lines use the same marker family and ends at
/// the first line that does not.
pub struct List;

impl List {
    pub const ORDERED: &'static str = r"^\s*(?P<start>[0-9]+)\.\s(?P<text>.*)$";
    pub const UNORDERED: &'static str = r"^\s*-\s(?P<text>.*)$";

    pub fn recognizer() -> Result<BlockRecognizer, RuleError> {
        Ok(BlockRecognizer::new("list")
            .opening(Self::ORDERED, BlockType::OrderedList)?
            .continued_by(Self::ORDERED)?
            .opening(Self::UNORDERED, BlockType::UnorderedList)?
            .continued_by(Self::UNORDERED)?
            .lines(BlockType::ListItem)
            .capture("start", Capture::Attr(AttrKey::Start)))
    }
}
