use serde::Serialize;

/// A single typed unit of parsed output representing one logical chunk of
/// the rendered reply.
///
/// The block sequence for an input is an order-preserving partition of its
/// lines: every line maps to exactly one block, with fence delimiter lines
/// consumed by the `CodeBlock` they delimit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// ATX-style heading, levels 1 through 3.
    Heading { level: u8, text: String },
    /// One list item. `index` carries the literal number from the source
    /// for ordered items and is `None` for bullets.
    ListItem {
        ordered: bool,
        index: Option<u64>,
        text: String,
    },
    /// Fenced code block. `language` is the trimmed tag from the opening
    /// fence, possibly empty. Lines are verbatim and never reformatted.
    CodeBlock { language: String, lines: Vec<String> },
    /// Any line not matching a more specific form.
    Paragraph { text: String },
    /// A blank source line, rendered as vertical space.
    Spacer,
}
