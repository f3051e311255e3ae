//! Lexer
//!
//! Turns one line of text into the typed tokens the recognizers work on.
//!
//! The tokenization is done entirely by the logos lexer (see `tokens.rs` for
//! the token grammar). There are only three kinds of tokens:
//!
//!     Number       a run of decimal digits, `42`
//!     Identifier   a letter followed by letters or digits, `x`, `x2`
//!     Symbol       any other single non-whitespace character, `+`, `^`, `=`
//!
//! Whitespace only separates tokens and is never emitted. A coefficient glued
//! to its variable (`3x`) therefore lexes as `Number(3) Identifier("x")`, the
//! same as `3 x`.

pub mod base_tokenization;
pub mod token_list;
pub mod tokens;

pub use base_tokenization::{tokenize, LexError};
pub use token_list::TokenList;
pub use tokens::Token;
