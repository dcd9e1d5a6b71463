//! # Block Kinds
//!
//! Each block kind owns its line syntax and builds its own
//! [`BlockRecognizer`](super::BlockRecognizer). Nothing outside this module
//! spells out a block pattern.

pub mod block_quote;
pub mod code_fence;
pub mod empty_line;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use empty_line::EmptyLine;
pub use heading::Heading;
pub use list::List;
pub use paragraph::Paragraph;
