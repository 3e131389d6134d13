//! Pull-based tokenizer over a message buffer.
//!
//! A [`Tokenizer`] owns a forward-only cursor over an immutable byte
//! buffer and a state machine tracking the bracket structure of the
//! message. Each call to [`Tokenizer::next_token`] skips interleaving
//! whitespace, scans one lexeme, and routes it through the active state,
//! which validates its shape, updates the nesting depth, and classifies
//! the result.
//!
//! A tokenizer is single-use and single-pass: to re-scan a buffer,
//! construct a fresh instance. After an error the tokenizer is left in
//! an unspecified state and must be discarded; it does not resynchronize.
//!
//! The grammar accepted here is purely lexical. Blocks 1 through 3 and 5
//! are flat `{tag:value}` groups, possibly with nested tags, while block
//! 4 is a free-text body of newline-delimited `:TAG:value` fields ending
//! in the `\r\n-` end-of-text marker. No block number is special-cased:
//! the tag/field distinction is driven entirely by delimiter shape.

mod scan;
mod state;
pub mod token;

pub use state::Error;
pub use token::{Token, TokenKind};

use scan::Cursor;
use state::State;

/// An incremental tokenizer over a single message buffer.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    state: State,
    depth: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer reading from the start of `data`.
    ///
    /// The buffer may hold several concatenated messages; the depth
    /// counter returns to zero between them.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
            state: State::BeginBlock,
            depth: 0,
        }
    }

    /// Advance to the next token.
    ///
    /// Returns `Ok(None)` at a clean end of input, once every opened
    /// block has been closed. Input that ends while a block or tag is
    /// still open fails with [`Error::UnexpectedEndOfInput`].
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, Error> {
        loop {
            self.cursor.commit();

            let Some(lexeme) = self.cursor.scan() else {
                if self.depth != 0 {
                    return Err(Error::UnexpectedEndOfInput);
                }
                return Ok(None);
            };

            // A step may consume its lexeme without producing a token
            // (the `:` introducing a text-block field).
            if let Some(token) = self.step(lexeme)? {
                return Ok(Some(token));
            }
        }
    }

    /// The number of currently open `{` groups.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, Error>;

    /// Yield the next token, or the error that ended the session.
    ///
    /// Iteration past an error is unspecified; stop at the first `Err`.
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
