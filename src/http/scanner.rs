//! Cursor primitives over a raw request buffer.
//!
//! The parser never indexes the buffer directly; every boundary is found
//! through a [`Scanner`], which never reads past the end of its slice.

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// A read-only cursor over a byte buffer.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The byte under the cursor, if any.
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Everything from the cursor to the end of the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos.min(self.buf.len())..]
    }

    /// The bytes between `start` and the cursor.
    pub fn slice_since(&self, start: usize) -> &'a [u8] {
        let end = self.pos.min(self.buf.len());
        &self.buf[start.min(end)..end]
    }

    /// Consumes bytes while `keep` holds, returning them.
    pub fn take_while(&mut self, keep: impl FnMut(u8) -> bool) -> &'a [u8] {
        self.take_while_max(usize::MAX, keep)
    }

    /// Like [`Scanner::take_while`] but stops after at most `max` bytes.
    pub fn take_while_max(&mut self, max: usize, mut keep: impl FnMut(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while self.pos - start < max {
            match self.peek() {
                Some(b) if keep(b) => self.pos += 1,
                _ => break,
            }
        }
        self.slice_since(start)
    }

    /// Skips a run of spaces and tabs (OWS) and returns how many were skipped.
    pub fn skip_optional_whitespace(&mut self) -> usize {
        let start = self.pos;
        while let Some(b' ' | b'\t') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advances until the cursor sits on a CR LF pair, or to the end of the
    /// buffer if there is none. Returns the number of bytes passed over.
    ///
    /// A CR that is not followed by LF is an ordinary byte.
    pub fn find_crlf(&mut self) -> usize {
        let start = self.pos;
        while !self.is_at_end() && !self.at_crlf() {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Whether the cursor begins a CR LF pair. Does not consume anything.
    pub fn at_crlf(&self) -> bool {
        matches!(self.remaining(), [CR, LF, ..])
    }

    /// Consumes a CR LF pair if the cursor sits on one.
    pub fn consume_crlf(&mut self) -> bool {
        if self.at_crlf() {
            self.pos += 2;
            true
        } else {
            false
        }
    }

    /// Consumes `byte` if it is under the cursor.
    pub fn consume_byte(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
