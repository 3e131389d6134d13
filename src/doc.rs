//! Receiver interfaces for assembling messages from the token stream.
//!
//! The walker in this module drives the tokenizer over a complete
//! message, pairing keys with the values that follow them, and publishes
//! each block to the [`FromBlocks`] and [`FromBlock`] traits.
//!
//! Content is delivered verbatim as byte slices of the input. What a
//! field means — an ISIN, a party identifier, a `16R` sequence start —
//! is for the receiver to decide.

pub mod slice;

pub use slice::decode as decode_slice;

/// Produce block receivers for a message.
pub trait FromBlocks {
    /// Retrieve a receiver for a block, if one is of interest.
    ///
    /// `id` is the block-type digit, `1` through `5`. Returning `None`
    /// skips the block's content while still checking its structure.
    fn add_block(&mut self, id: u8) -> Option<&mut dyn FromBlock>;
}

/// Receive the content of a single block.
///
/// The default implementation of each method ignores received values.
#[allow(unused_variables)]
pub trait FromBlock {
    /// Add a nested `{key:value}` tag to the block.
    fn add_tag(&mut self, key: &[u8], value: &[u8]) {}
    /// Add a `:TAG:value` text field to the block.
    fn add_field(&mut self, key: &[u8], value: &[u8]) {}
    /// Add unkeyed block content, such as a header payload or the
    /// end-of-text marker.
    fn add_content(&mut self, value: &[u8]) {}
}
