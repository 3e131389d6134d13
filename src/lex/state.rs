//! The block grammar state machine.

use thiserror::Error;

use super::Tokenizer;
use super::token::{Token, TokenKind};

/// An error advancing the tokenizer.
///
/// Every error is fatal to the decode session: the message is
/// unparseable from that point forward, and the tokenizer must be
/// discarded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input ended while a block or tag was still open.
    #[error("Unexpected end of input inside an open block.")]
    UnexpectedEndOfInput,
    /// A top-level lexeme was not a block open.
    #[error("Expected a block open, found `{0}`.")]
    ExpectedBlockOpen(char),
    /// A block open was not followed by a block-type digit `1`-`5`.
    #[error("Unknown block identifier `{0}`.")]
    UnknownBlockIdentifier(char),
    /// A block identifier or key was not followed by a `:` delimiter.
    #[error("Expected a delimiter, found `{0}`.")]
    ExpectedDelimiter(char),
    /// A tag open was not followed by a key.
    #[error("Expected a tag key, found `{0}`.")]
    ExpectedTagKey(char),
    /// A field introducer was not followed by a field tag.
    #[error("Expected a field tag, found `{0}`.")]
    ExpectedFieldTag(char),
    /// A `}` closed a tag in a way that would leave the surrounding
    /// block structure unbalanced.
    #[error("Unbalanced tag close.")]
    UnbalancedTagClose,
}

/// The active state of the tokenizer: what kind of lexeme is expected,
/// and how to interpret it.
///
/// The delimiter state is split in two so that the value following a
/// `:` is known to be either re-entrant block content or a terminal
/// field body without a separate pending flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    /// At the top level, before a block open.
    BeginBlock,
    /// After a block open, expecting the block-type digit.
    BlockId,
    /// After a block identifier or tag key, expecting `:`.
    Delimiter,
    /// After a field tag, expecting `:`.
    FieldDelimiter,
    /// Inside a block body.
    BlockValue,
    /// After a tag open, expecting the tag key.
    TagKey,
    /// After a field introducer, expecting the field tag.
    FieldKey,
    /// After a field delimiter, expecting the field body.
    FieldValue,
}

impl<'a> Tokenizer<'a> {
    /// Route one lexeme through the active state.
    ///
    /// Returns `Ok(None)` for lexemes consumed without producing a
    /// token: the `:` that introduces a text-block field selects the
    /// field path but is not part of the token stream.
    pub(super) fn step(&mut self, lexeme: &'a [u8]) -> Result<Option<Token<'a>>, Error> {
        let token = match self.state {
            State::BeginBlock => match lexeme[0] {
                b'{' => {
                    self.depth += 1;
                    self.state = State::BlockId;
                    Token::new(TokenKind::BlockOpen, lexeme)
                }
                c => return Err(Error::ExpectedBlockOpen(c as char)),
            },
            State::BlockId => match lexeme[0] {
                b'1'..=b'5' => {
                    self.state = State::Delimiter;
                    Token::new(TokenKind::BlockId, lexeme)
                }
                b'}' => {
                    // An empty top-level block.
                    self.depth -= 1;
                    self.state = State::BeginBlock;
                    Token::new(TokenKind::BlockClose, lexeme)
                }
                c => return Err(Error::UnknownBlockIdentifier(c as char)),
            },
            State::Delimiter => match lexeme[0] {
                b':' => {
                    self.state = State::BlockValue;
                    Token::new(TokenKind::Delimiter, lexeme)
                }
                c => return Err(Error::ExpectedDelimiter(c as char)),
            },
            State::FieldDelimiter => match lexeme[0] {
                b':' => {
                    self.state = State::FieldValue;
                    Token::new(TokenKind::Delimiter, lexeme)
                }
                c => return Err(Error::ExpectedDelimiter(c as char)),
            },
            State::BlockValue => match lexeme[0] {
                b'{' => {
                    self.depth += 1;
                    self.state = State::TagKey;
                    Token::new(TokenKind::BlockOpen, lexeme)
                }
                b':' => {
                    // A field introducer separates records rather than a
                    // key from a value; it is consumed silently.
                    self.state = State::FieldKey;
                    return Ok(None);
                }
                b'}' => {
                    self.depth -= 1;
                    self.state = if self.depth == 0 {
                        State::BeginBlock
                    } else {
                        State::BlockValue
                    };
                    Token::new(TokenKind::BlockClose, lexeme)
                }
                _ => Token::new(TokenKind::Value, lexeme),
            },
            State::TagKey => match lexeme[0] {
                b'}' => {
                    // An inner tag cannot close the surrounding block;
                    // only a pop to the top level is accepted here.
                    self.depth -= 1;
                    if self.depth != 0 {
                        return Err(Error::UnbalancedTagClose);
                    }
                    self.state = State::BlockValue;
                    Token::new(TokenKind::BlockClose, lexeme)
                }
                c @ (b'{' | b':') => return Err(Error::ExpectedTagKey(c as char)),
                _ => {
                    self.state = State::Delimiter;
                    Token::new(TokenKind::TagKey, lexeme)
                }
            },
            State::FieldKey => match lexeme[0] {
                c @ (b'{' | b'}' | b':') => return Err(Error::ExpectedFieldTag(c as char)),
                _ => {
                    self.state = State::FieldDelimiter;
                    Token::new(TokenKind::FieldKey, lexeme)
                }
            },
            State::FieldValue => {
                self.state = State::BlockValue;
                Token::new(TokenKind::FieldValue, self.trim_field(lexeme))
            }
        };

        Ok(Some(token))
    }

    /// Strip the line terminator from a field body.
    ///
    /// When the body runs into the end-of-text marker, the `-` byte is
    /// held back so the following scan yields it as its own token.
    fn trim_field(&mut self, lexeme: &'a [u8]) -> &'a [u8] {
        for eot in [b"\r\n-".as_slice(), b"\n-".as_slice()] {
            if let Some(body) = lexeme.strip_suffix(eot) {
                self.cursor.unread(1);
                return body;
            }
        }

        if let Some(body) = lexeme.strip_suffix(b"\r\n") {
            body
        } else if let Some(body) = lexeme.strip_suffix(b"\n") {
            body
        } else {
            lexeme
        }
    }
}
