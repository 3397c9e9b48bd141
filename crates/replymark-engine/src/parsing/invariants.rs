use crate::parsing::blocks::Block;

/// Validates parser output invariants against the original input.
///
/// Asserts that:
/// - every input line is accounted for by exactly one block, with only
///   fence delimiter lines unaccounted (one for an unterminated trailing
///   fence, two for a closed one)
/// - heading levels stay within 1..=3
/// - numbered items carry an index and bullets do not
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, blocks: &[Block]) {
    let total_lines = text.split('\n').count();
    let mut consumed = 0usize;
    let mut code_blocks = 0usize;

    for b in blocks {
        match b {
            Block::CodeBlock { lines, .. } => {
                code_blocks += 1;
                consumed += lines.len();
            }
            Block::Heading { level, .. } => {
                assert!(
                    (1..=3).contains(level),
                    "heading level out of range: {level}"
                );
                consumed += 1;
            }
            Block::ListItem { ordered, index, .. } => {
                assert_eq!(
                    *ordered,
                    index.is_some(),
                    "list item index does not match ordering: {b:?}"
                );
                consumed += 1;
            }
            Block::Paragraph { .. } | Block::Spacer => consumed += 1,
        }
    }

    let delimiters = total_lines.checked_sub(consumed).unwrap_or_else(|| {
        panic!("blocks consume more lines ({consumed}) than the input has ({total_lines})")
    });
    assert!(
        delimiters >= code_blocks && delimiters <= 2 * code_blocks,
        "fence delimiter accounting off: {delimiters} unconsumed lines for {code_blocks} code blocks"
    );
}
