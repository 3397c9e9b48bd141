/// Backtick-delimited inline code.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
