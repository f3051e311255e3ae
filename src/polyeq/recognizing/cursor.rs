//! Immutable token cursor and the primitive acceptors
//!
//! A `Cursor` is a `Copy` position into a token slice. Acceptors take the
//! cursor by value and return `Some` with the advanced cursor on a match, or
//! `None` otherwise. A caller that gets `None` still holds its own copy of the
//! cursor, so rejection never moves anything: every acceptor built on top of
//! these is atomic without any explicit rollback.

use crate::polyeq::lexing::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor before the first token of `tokens`
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor {
            tokens,
            position: 0,
        }
    }

    /// Index of the next unconsumed token in the original slice
    pub fn position(&self) -> usize {
        self.position
    }

    /// The token under the cursor, if any
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Everything not yet consumed
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.position..]
    }

    /// True once every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn advance(self) -> Self {
        Cursor {
            tokens: self.tokens,
            position: self.position + 1,
        }
    }

    /// Accept a number token, yielding its value
    pub fn accept_number(self) -> Option<(Self, u64)> {
        let value = self.peek()?.as_number()?;
        Some((self.advance(), value))
    }

    /// Accept an identifier token, yielding its name
    pub fn accept_identifier(self) -> Option<(Self, &'a str)> {
        let name = self.peek()?.as_identifier()?;
        Some((self.advance(), name))
    }

    /// Accept the symbol `expected`
    pub fn accept_symbol(self, expected: char) -> Option<Self> {
        if self.peek()?.is_symbol(expected) {
            Some(self.advance())
        } else {
            None
        }
    }
}
