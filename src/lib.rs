#![no_std]

//! An incremental tokenizer for SWIFT MT financial messages.
//!
//! Telexer converts a buffer of bracket-delimited message bytes into a
//! stream of syntactically classified tokens, enforcing the format's
//! nesting and delimiter rules as it goes. Tokens borrow directly from
//! the input; nothing is copied and nothing is allocated.
//!
//! Most users should begin with the receiver traits and walker in the
//! [`doc`] module, which pair keys with their values and publish whole
//! blocks. Applications needing finer control over the token stream
//! (such as streaming validators) can drive the [`lex`] module directly.
//!
//! Field *content* is never interpreted: validating ISINs, party
//! identifiers, or sequence markers is the caller's concern. The crate
//! promises lexical shape and nesting correctness only.

pub mod doc;
pub mod lex;
