/// Double-asterisk bold markup.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8] = b"**";
}
