//! Slice-based message walker.

use either::Either::{self, Left, Right};

use crate::lex::{Error, Token, TokenKind, Tokenizer};

use super::FromBlocks;

/// Walk every block of a message slice, publishing to a receiver.
///
/// This function is also re-exported as `telexer::doc::decode_slice`.
/// Structural validation is the tokenizer's: any malformed input fails
/// with the corresponding [`Error`] and nothing further is published.
pub fn decode(r: &[u8], o: &mut impl FromBlocks) -> Result<(), Error> {
    let mut lexer = Tokenizer::new(r);

    while let Some(token) = lexer.next_token()? {
        debug_assert_eq!(token.kind, TokenKind::BlockOpen);
        decode_block(&mut lexer, o)?;
    }

    Ok(())
}

fn decode_block(lexer: &mut Tokenizer<'_>, o: &mut impl FromBlocks) -> Result<(), Error> {
    let token = next(lexer)?;
    if token.kind == TokenKind::BlockClose {
        // An empty block carries nothing to publish.
        return Ok(());
    }

    debug_assert_eq!(token.kind, TokenKind::BlockId);
    let id = token.bytes[0] - b'0';

    // Shadow the document receiver with that of a single block.
    let mut o = o.add_block(id);

    // The delimiter between the block identifier and its content.
    let token = next(lexer)?;
    debug_assert_eq!(token.kind, TokenKind::Delimiter);

    // The key waiting for its value, a tag key on the left or a field
    // key on the right.
    let mut key: Option<Either<&[u8], &[u8]>> = None;
    let mut depth = 1;

    loop {
        let token = next(lexer)?;

        match token.kind {
            TokenKind::BlockOpen => depth += 1,
            TokenKind::BlockClose => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            TokenKind::TagKey => key = Some(Left(token.bytes)),
            TokenKind::FieldKey => key = Some(Right(token.bytes)),
            TokenKind::Value | TokenKind::FieldValue => {
                if let Some(o) = &mut o {
                    match key.take() {
                        Some(Left(k)) => o.add_tag(k, token.bytes),
                        Some(Right(k)) => o.add_field(k, token.bytes),
                        None => o.add_content(token.bytes),
                    }
                }
            }
            TokenKind::Delimiter | TokenKind::BlockId => {}
        }
    }
}

/// Fetch a token from inside a block, where input cannot cleanly end.
fn next<'a>(lexer: &mut Tokenizer<'a>) -> Result<Token<'a>, Error> {
    lexer.next_token()?.ok_or(Error::UnexpectedEndOfInput)
}
