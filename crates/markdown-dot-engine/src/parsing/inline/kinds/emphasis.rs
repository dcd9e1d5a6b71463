use crate::parsing::{error::RuleError, inline::InlineRule};
use crate::tree::BlockType;

pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = r"^(?P<pre>.*)\*\*(?P<body>.+)\*\*(?P<post>.*)$";
    pub const ITALIC: &'static str = r"^(?P<pre>.*)\*(?P<body>.+)\*(?P<post>.*)$";

    pub fn bold() -> Result<InlineRule, RuleError> {
        InlineRule::new("bold", Self::BOLD, BlockType::Bold)
    }

    pub fn italic() -> Result<InlineRule, RuleError> {
        InlineRule::new("italic", Self::ITALIC, BlockType::Italic)
    }
}
