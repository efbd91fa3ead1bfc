/// Read position within a borrowed input string
///
/// Every position the parser stops at sits on an ASCII delimiter or at the
/// end of input, so slicing at those offsets always lands on a char boundary.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the cursor
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Next byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume `b` if it is the next byte
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `prefix` if the remaining input starts with it
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if self.remaining().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume `len` bytes and return them
    pub fn take(&mut self, len: usize) -> &'a str {
        let start = self.pos;
        self.pos = (start + len).min(self.input.len());
        &self.input[start..self.pos]
    }

    /// Consume everything up to (not including) the offset `end` relative to
    /// the cursor, or to end of input when `end` is `None`
    pub fn take_until(&mut self, end: Option<usize>) -> &'a str {
        let len = end.unwrap_or(self.input.len() - self.pos);
        self.take(len)
    }
}
