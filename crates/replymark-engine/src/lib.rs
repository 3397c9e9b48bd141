pub mod parsing;

// Re-export key types for easier usage
pub use parsing::blocks::Block;
pub use parsing::inline::Span;
pub use parsing::{format_inline, parse_blocks};
