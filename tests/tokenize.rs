use pretty_assertions::assert_eq;
use telexer::lex::{Error, TokenKind, Tokenizer};

/// A complete message exercising every block style: flat header blocks,
/// nested tag groups, and a multi-field text body.
const MESSAGE: &str = "{1:F01YOURCODEZABC1234123456}\
{2:I103SOGEFRPPZXXXU3003}\
{3:{103:TGT}{108:OPTUSERREF16CHAR}}\
{4:\n:16R:USECU\n:35B:ISIN CH0101010101\n/XS/232323232\nFINANCIAL INSTRUMENT ACME\n-}\
{5:{AA:11}}";

fn normalize(s: &str) -> Vec<u8> {
    s.replace('\n', "\r\n").into_bytes()
}

fn collect(data: &[u8]) -> Result<Vec<String>, Error> {
    let mut lexer = Tokenizer::new(data);
    let mut tokens = vec![];
    while let Some(token) = lexer.next_token()? {
        tokens.push(String::from_utf8_lossy(token.bytes).into_owned());
    }
    Ok(tokens)
}

#[test]
fn tokenizes_full_message() {
    let data = normalize(MESSAGE);
    let tokens = collect(&data).unwrap();

    let expected: Vec<&str> = vec![
        "{", "1", ":", "F01YOURCODEZABC1234123456", "}",
        "{", "2", ":", "I103SOGEFRPPZXXXU3003", "}",
        "{", "3", ":",
        "{", "103", ":", "TGT", "}",
        "{", "108", ":", "OPTUSERREF16CHAR", "}",
        "}",
        "{", "4", ":",
        "16R", ":", "USECU",
        "35B", ":", "ISIN CH0101010101\r\n/XS/232323232\r\nFINANCIAL INSTRUMENT ACME",
        "-",
        "}",
        "{", "5", ":",
        "{", "AA", ":", "11", "}",
        "}",
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn classifies_tokens() {
    use TokenKind::*;

    let data = normalize("{4:\n:16R:USECU\n-}");
    let kinds: Vec<TokenKind> = Tokenizer::new(&data)
        .map(|t| t.unwrap().kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            BlockOpen, BlockId, Delimiter, FieldKey, Delimiter, FieldValue, Value, BlockClose,
        ],
    );
}

#[test]
fn ends_cleanly_at_depth_zero() {
    let data = normalize(MESSAGE);
    let mut lexer = Tokenizer::new(&data);

    while lexer.next_token().unwrap().is_some() {}

    assert_eq!(lexer.depth(), 0);
    // The end of the stream is stable.
    assert_eq!(lexer.next_token(), Ok(None));
}

#[test]
fn nested_tags_reach_depth_two() {
    let data = b"{3:{103:TGT}{108:OPTUSERREF16CHAR}}";
    let mut lexer = Tokenizer::new(data);
    let mut max_depth = 0;

    while lexer.next_token().unwrap().is_some() {
        max_depth = max_depth.max(lexer.depth());
    }

    assert_eq!(max_depth, 2);
    assert_eq!(lexer.depth(), 0);
}

#[test]
fn retokenizing_is_idempotent() {
    let data = normalize(MESSAGE);
    assert_eq!(collect(&data).unwrap(), collect(&data).unwrap());
}

#[test]
fn strips_bare_newline_terminators() {
    // The same message shape with lone `\n` line endings.
    let data = b"{4:\n:16R:USECU\n:35B:ISIN CH0101010101\n-}";
    let tokens = collect(data).unwrap();

    let expected: Vec<&str> = vec![
        "{", "4", ":", "16R", ":", "USECU", "35B", ":", "ISIN CH0101010101", "-", "}",
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn whitespace_between_tokens_is_dropped() {
    let padded = b"  {1: F01ABC }\t\r\n {5:{AA: 11 }} \r\n";
    let tokens = collect(padded).unwrap();

    // Idents may carry trailing whitespace (multi-line bodies depend on
    // it), but never leading whitespace, and padding between structural
    // bytes is silent.
    let expected: Vec<&str> = vec![
        "{", "1", ":", "F01ABC ", "}", "{", "5", ":", "{", "AA", ":", "11 ", "}", "}",
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn whitespace_only_input_is_empty() {
    assert_eq!(Tokenizer::new(b" \t\r\n ").next_token(), Ok(None));
    assert_eq!(Tokenizer::new(b"").next_token(), Ok(None));
}

#[test]
fn truncated_message_fails() {
    // The final top-level block is left open.
    let data = normalize("{1:F01ABC}{4:\n:16R:USECU\n-");
    assert_eq!(collect(&data), Err(Error::UnexpectedEndOfInput));
}

#[test]
fn open_tag_at_end_fails() {
    assert_eq!(collect(b"{3:{103:TGT"), Err(Error::UnexpectedEndOfInput));
}

#[test]
fn rejects_leading_garbage() {
    assert_eq!(collect(b"X{1:A}"), Err(Error::ExpectedBlockOpen('X')));
    assert_eq!(collect(b"}"), Err(Error::ExpectedBlockOpen('}')));
}

#[test]
fn rejects_unknown_block_identifier() {
    assert_eq!(collect(b"{9:A}"), Err(Error::UnknownBlockIdentifier('9')));
    assert_eq!(collect(b"{A:1}"), Err(Error::UnknownBlockIdentifier('A')));
}

#[test]
fn rejects_missing_delimiter() {
    assert_eq!(collect(b"{1}"), Err(Error::ExpectedDelimiter('}')));
    assert_eq!(collect(b"{3:{103{"), Err(Error::ExpectedDelimiter('{')));
}

#[test]
fn rejects_empty_tag() {
    // A `}` where a tag key is expected cannot balance the block.
    assert_eq!(collect(b"{3:{}}"), Err(Error::UnbalancedTagClose));
}

#[test]
fn rejects_structural_bytes_as_field_tag() {
    assert_eq!(collect(b"{4:\r\n:}"), Err(Error::ExpectedFieldTag('}')));
    assert_eq!(collect(b"{4:\r\n::"), Err(Error::ExpectedFieldTag(':')));
}

#[test]
fn empty_blocks_are_accepted() {
    let tokens = collect(b"{}{1:A}").unwrap();
    let expected: Vec<&str> = vec!["{", "}", "{", "1", ":", "A", "}"];
    assert_eq!(tokens, expected);
}

#[test]
fn end_of_text_marker_is_its_own_token() {
    let data = normalize("{4:\n:16R:USECU\n-}");
    let tokens: Vec<_> = Tokenizer::new(&data).map(|t| t.unwrap()).collect();

    let marker = &tokens[tokens.len() - 2];
    assert_eq!(marker.bytes, b"-");
    assert_eq!(marker.kind, TokenKind::Value);

    // The field body keeps no part of the terminator or marker.
    let value = &tokens[tokens.len() - 3];
    assert_eq!(value.bytes, b"USECU");
    assert_eq!(value.kind, TokenKind::FieldValue);
}
