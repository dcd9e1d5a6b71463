use crate::parsing::blocks::{BlockRecognizer, Capture};
use crate::parsing::error::RuleError;
use crate::tree::BlockType;

/// ATX heading. The `#` run sets the level; the text may be empty.
pub struct Heading;

impl Heading {
    pub const OPEN: &'static str = r"^(?P<level>#+)(?:\s+(?P<text>.*))?$";

    pub fn recognizer() -> Result<BlockRecognizer, RuleError> {
        Ok(BlockRecognizer::new("heading")
            .opening(Self::OPEN, BlockType::Heading)?
            .capture("level", Capture::Level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# One", 1, Some("One"))]
    #[case("### Title", 3, Some("Title"))]
    #[case("###### Deep", 6, Some("Deep"))]
    #[case("##", 2, None)]
    fn level_follows_hash_run(
        #[case] line: &str,
        #[case] level: u8,
        #[case] text: Option<&str>,
    ) {
        let opened = Heading::recognizer().unwrap().match_opening(line).unwrap();
        assert_eq!(opened.level, Some(level));
        assert_eq!(opened.text.as_deref(), text);
    }

    #[test]
    fn hashtag_is_not_a_heading() {
        assert!(Heading::recognizer().unwrap().match_opening("#tag").is_none());
    }

    #[test]
    fn heading_is_single_line() {
        assert!(!Heading::recognizer().unwrap().is_multiline(0));
    }
}
