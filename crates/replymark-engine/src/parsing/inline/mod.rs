//! # Inline Formatting
//!
//! Resolves inline markup in a single line of plain text into typed
//! [`Span`]s. Applied to the text of headings, list items, and paragraphs;
//! never to fenced code content.
//!
//! ## Raw Zone Precedence
//!
//! Code spans are resolved first and suppress bold parsing inside them:
//! `**` between backticks stays literal. Unbalanced delimiters of either
//! kind remain literal text; the formatter never fails.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format_inline;
pub use types::Span;
