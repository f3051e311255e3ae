//! Token definitions for equation lines
//!
//! This module defines all the tokens that can be produced by the polyeq lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in an equation line
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Token {
    // Digits only; a value that does not fit in u64 is a lexing error
    #[regex("[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Number(u64),

    #[regex("[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Catch-all: every other single non-whitespace character
    #[regex(r"[^\s0-9A-Za-z]", |lex| lex.slice().chars().next())]
    Symbol(char),
}

impl Token {
    /// Check if this token is the given symbol character
    pub fn is_symbol(&self, expected: char) -> bool {
        matches!(self, Token::Symbol(c) if *c == expected)
    }

    /// The numeric value, if this is a number token
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Token::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The name, if this is an identifier token
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Symbol(c) => write!(f, "{}", c),
        }
    }
}
