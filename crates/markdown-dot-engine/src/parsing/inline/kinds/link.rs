use crate::parsing::{error::RuleError, inline::InlineRule};
use crate::tree::{AttrKey, BlockType};

/// Bracket-and-parenthesis spans: images and links.
///
/// The image pattern is the link pattern with a leading `!`, so the image
/// rule has to run first.
pub struct LinkLike;

impl LinkLike {
    pub const IMAGE: &'static str =
        r"^(?P<pre>.*)!\[(?P<body>[^\]]*)\]\s*\((?P<src>[^)]+)\)(?P<post>.*)$";
    pub const LINK: &'static str =
        r"^(?P<pre>.*)\[(?P<body>[^\]]+)\]\s*\((?P<href>[^)]+)\)(?P<post>.*)$";

    pub fn image() -> Result<InlineRule, RuleError> {
        InlineRule::new("image", Self::IMAGE, BlockType::Image)?.capture("src", AttrKey::Src)
    }

    pub fn link() -> Result<InlineRule, RuleError> {
        InlineRule::new("link", Self::LINK, BlockType::Link)?.capture("href", AttrKey::Href)
    }
}
