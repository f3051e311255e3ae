//! The token list of one line
//!
//! A `TokenList` owns the tokens of a single attempt together with their byte
//! spans in the source line. The recognizers only ever borrow its token slice;
//! nothing is retained once the attempt is over.

use crate::polyeq::lexing::tokens::Token;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
    spans: Vec<Range<usize>>,
}

impl TokenList {
    /// Build a list from parallel token and span vectors
    pub fn new(tokens: Vec<Token>, spans: Vec<Range<usize>>) -> Self {
        debug_assert_eq!(tokens.len(), spans.len());
        TokenList { tokens, spans }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// Serialized as the bare token sequence; spans are a source-side detail
impl Serialize for TokenList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tokens.serialize(serializer)
    }
}

/// Space-separated token texts, e.g. `3 x ^ 2 = 5`
impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
