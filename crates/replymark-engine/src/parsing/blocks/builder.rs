use super::{
    classify::LineClass,
    open::{BlockOpen, try_open_leaf},
    types::Block,
};

#[derive(Debug, Clone)]
enum Mode {
    Normal,
    InFence {
        language: String,
        buffer: Vec<String>,
    },
}

/// State machine that consumes classified lines and emits blocks.
///
/// Call [`push`](Self::push) once per input line in order, then
/// [`finish`](Self::finish) to obtain the block sequence. An unterminated
/// fence is flushed at the end so truncated replies lose no content.
pub struct BlockBuilder {
    mode: Mode,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            out: Vec::new(),
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if matches!(self.mode, Mode::InFence { .. }) {
            self.consume_fence_line(c);
            return;
        }

        if let Some(open) = try_open_leaf(&c.raw) {
            self.open_leaf(open);
            return;
        }

        if c.is_blank {
            self.out.push(Block::Spacer);
            return;
        }

        self.out.push(Block::Paragraph {
            text: c.raw.clone(),
        });
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF inside a fence: emit whatever accumulated instead of dropping
        // it. When the input ends with a newline the split leaves a phantom
        // empty segment behind; that segment is not a content line, so it is
        // trimmed from the buffer tail. Blank lines before a real closing
        // fence are untouched by this.
        let prev = std::mem::replace(&mut self.mode, Mode::Normal);
        if let Mode::InFence {
            language,
            mut buffer,
        } = prev
        {
            if buffer.last().is_some_and(|l| l.is_empty()) {
                buffer.pop();
            }
            self.out.push(Block::CodeBlock {
                language,
                lines: buffer,
            });
        }
        self.out
    }

    fn open_leaf(&mut self, open: BlockOpen) {
        match open {
            BlockOpen::FencedCode { language } => {
                self.mode = Mode::InFence {
                    language,
                    buffer: Vec::new(),
                };
            }
            BlockOpen::Heading { level, text } => {
                self.out.push(Block::Heading { level, text });
            }
            BlockOpen::Bullet { text } => {
                self.out.push(Block::ListItem {
                    ordered: false,
                    index: None,
                    text,
                });
            }
            BlockOpen::Numbered { index, text } => {
                self.out.push(Block::ListItem {
                    ordered: true,
                    index: Some(index),
                    text,
                });
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        if c.fence_close {
            let prev = std::mem::replace(&mut self.mode, Mode::Normal);
            if let Mode::InFence { language, buffer } = prev {
                self.out.push(Block::CodeBlock {
                    language,
                    lines: buffer,
                });
            }
            return;
        }

        if let Mode::InFence { buffer, .. } = &mut self.mode {
            buffer.push(c.raw.clone());
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
