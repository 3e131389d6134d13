//! Cursor and lexeme scanner over the raw input.

use memchr::memchr3;

/// A forward-only cursor over the input buffer.
///
/// `offset` marks the start of unconsumed data and `pos` the length of
/// the most recently scanned lexeme (with any whitespace skipped before
/// it). Committing folds `pos` into `offset`; the cursor never rewinds
/// past committed data.
#[derive(Debug)]
pub(super) struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            pos: 0,
        }
    }

    /// Consume the most recently scanned lexeme.
    pub(super) fn commit(&mut self) {
        self.offset += self.pos;
        self.pos = 0;
    }

    /// Leave the final `n` bytes of the current lexeme unconsumed, to be
    /// scanned again on the next call.
    pub(super) fn unread(&mut self, n: usize) {
        self.pos -= n;
    }

    /// Scan the next lexeme, skipping leading whitespace.
    ///
    /// The structural bytes `{`, `}`, and `:` form single-byte lexemes;
    /// anything else extends to the next structural byte or the end of
    /// the buffer, and may itself span line breaks (multi-line field
    /// bodies). Returns `None` once only whitespace remains.
    pub(super) fn scan(&mut self) -> Option<&'a [u8]> {
        let rest = &self.data[self.offset..];
        let start = rest.iter().position(|b| !is_whitespace(*b))?;

        let len = match rest[start] {
            b'{' | b'}' | b':' => 1,
            _ => memchr3(b'{', b'}', b':', &rest[start..]).unwrap_or(rest.len() - start),
        };

        self.pos = start + len;
        Some(&rest[start..self.pos])
    }
}

fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n')
}
