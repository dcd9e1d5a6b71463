//! # Inline Kinds
//!
//! Built-in span syntaxes. Each type owns its pattern text and knows how to
//! turn it into an [`InlineRule`](super::InlineRule).
//!
//! - **`Emphasis`**: `**bold**` and `*italics*`
//! - **`CodeSpan`**: `` `code` ``
//! - **`LinkLike`**: `![alt](src)` and `[text](href)`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::LinkLike;
