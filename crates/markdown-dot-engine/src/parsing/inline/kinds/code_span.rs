use crate::parsing::{error::RuleError, inline::InlineRule};
use crate::tree::BlockType;

/// Backtick-delimited inline code.
pub struct CodeSpan;

impl CodeSpan {
    pub const PATTERN: &'static str = r"^(?P<pre>.*)`(?P<body>[^`]+)`(?P<post>.*)$";

    pub fn rule() -> Result<InlineRule, RuleError> {
        InlineRule::new("inline-code", Self::PATTERN, BlockType::InlineCode)
    }
}
