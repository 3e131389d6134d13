//! Classified slices of the input buffer.

/// The syntactic class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A `{` opening a block or a nested tag.
    BlockOpen,
    /// A `}` closing a block or a nested tag.
    BlockClose,
    /// The `:` separating a key from its value.
    Delimiter,
    /// The block-type digit following a block open.
    ///
    /// `1`: basic header, `2`: application header, `3`: user header,
    /// `4`: text (body), `5`: trailer.
    BlockId,
    /// The key of a nested `{key:value}` tag.
    TagKey,
    /// The tag of a `:TAG:value` text-block field.
    FieldKey,
    /// Raw block content, including tag values and the end-of-text
    /// marker.
    Value,
    /// The body of a text-block field, line terminator stripped.
    FieldValue,
}

/// A token borrowed from the input buffer.
///
/// Tokens are transient views: they are owned by the caller on return
/// and never retained by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub bytes: &'a [u8],
}

impl<'a> Token<'a> {
    pub(super) fn new(kind: TokenKind, bytes: &'a [u8]) -> Self {
        Self { kind, bytes }
    }
}
