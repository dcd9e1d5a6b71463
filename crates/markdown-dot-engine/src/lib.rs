//! # markdown-dot engine
//!
//! Converts Markdown lines into a Document Object Tree ([`Dot`]) and renders
//! the tree as HTML.
//!
//! ```
//! use markdown_dot_engine::convert_str;
//!
//! assert_eq!(convert_str("### Title"), "<h3>Title</h3>\n");
//! ```

pub mod convert;
pub mod io;
pub mod parsing;
pub mod render;
pub mod tree;


// Re-export key types for easier usage
pub use convert::{Converter, HtmlConverter};
pub use io::*;
pub use parsing::{Pipeline, RuleError, parse_lines, parse_str};
pub use render::{HtmlRenderer, Shell};
pub use tree::{AttrKey, Attributes, BlockType, Dot, Node, NodeId, NodeKind, Values};

/// Parses `input` with the built-in rules and renders an HTML fragment.
pub fn convert_str(input: &str) -> String {
    HtmlRenderer::new().render_fragment(&parse_str(input))
}
