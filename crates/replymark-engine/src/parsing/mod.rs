//! # Reply Parsing
//!
//! Converts the free-form text of a model reply into typed [`Block`]s, with
//! inline markup resolved separately into [`Span`]s per text-bearing block.
//!
//! Two collaborating pieces:
//!
//! 1. **Block parsing** (`blocks`): a line-oriented state machine producing
//!    an ordered `Vec<Block>` covering every input line.
//! 2. **Inline formatting** (`inline`): a per-line scanner resolving inline
//!    code and bold markup into `Vec<Span>`.
//!
//! Both are total functions over arbitrary strings: empty, truncated, or
//! control-character input still produces a valid result. Presentation maps
//! each block to a visual element, calling [`format_inline`] on the text of
//! headings, list items, and paragraphs; fenced code is never reformatted.
//!
//! [`Span`]: inline::Span

pub mod blocks;
pub mod inline;
pub mod invariants;


use blocks::{Block, BlockBuilder, LineClassifier};

/// Parses a complete reply into an ordered sequence of blocks.
///
/// The split on `'\n'` is lossy: terminators belong to no line, and a
/// trailing line without a terminator is still a line.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.split('\n') {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}

pub use inline::format_inline;
