//! Base tokenization for equation lines
//!
//! This is the entry point where source strings become token lists. Unlike the
//! recognizers, lexing can fail in a way worth reporting (a number too large
//! for `u64`); the caller decides how to surface that. For the analysis
//! protocol it simply means "not an equation".

use crate::polyeq::lexing::token_list::TokenList;
use crate::polyeq::lexing::tokens::Token;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Errors that can occur while tokenizing a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Input logos could not match
    UnexpectedInput { span: Range<usize>, text: String },
    /// A digit run whose value does not fit in `u64`
    NumberOutOfRange { span: Range<usize>, text: String },
}

impl LexError {
    /// Byte range of the offending input
    pub fn span(&self) -> Range<usize> {
        match self {
            LexError::UnexpectedInput { span, .. } | LexError::NumberOutOfRange { span, .. } => {
                span.clone()
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedInput { span, text } => {
                write!(f, "Unexpected input '{}' at {}..{}", text, span.start, span.end)
            }
            LexError::NumberOutOfRange { span, text } => {
                write!(
                    f,
                    "Number '{}' at {}..{} is too large",
                    text, span.start, span.end
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize one line of source text with location information
///
/// Stops at the first lexing error; a partial token list is never returned.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut spans = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                tokens.push(token);
                spans.push(lexer.span());
            }
            Err(()) => {
                let span = lexer.span();
                let text = lexer.slice().to_string();
                return Err(if text.chars().all(|c| c.is_ascii_digit()) && !text.is_empty() {
                    LexError::NumberOutOfRange { span, text }
                } else {
                    LexError::UnexpectedInput { span, text }
                });
            }
        }
    }

    Ok(TokenList::new(tokens, spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes() {
        let list = tokenize("3x^2 = 5").expect("line to tokenize");
        assert_eq!(
            list.tokens(),
            &[
                Token::Number(3),
                Token::Identifier("x".to_string()),
                Token::Symbol('^'),
                Token::Number(2),
                Token::Symbol('='),
                Token::Number(5),
            ]
        );
        assert_eq!(list.spans()[0], 0..1);
        assert_eq!(list.spans()[1], 1..2);
        assert_eq!(list.spans()[4], 5..6);
    }

    #[test]
    fn test_empty_input() {
        let list = tokenize("").expect("empty line to tokenize");
        assert!(list.is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        let list = tokenize("  \t  ").expect("blank line to tokenize");
        assert!(list.is_empty());
    }

    #[test]
    fn test_number_out_of_range() {
        let err = tokenize("x = 123456789012345678901234567890").unwrap_err();
        assert!(matches!(err, LexError::NumberOutOfRange { .. }));
        assert_eq!(err.span(), 4..34);
    }

    #[test]
    fn test_unicode_space_is_unexpected() {
        // Only ASCII whitespace separates tokens
        let err = tokenize("x\u{a0}= 1").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedInput { .. }));
    }

    #[test]
    fn test_largest_number_fits() {
        let list = tokenize("18446744073709551615").expect("u64::MAX to tokenize");
        assert_eq!(list.tokens(), &[Token::Number(u64::MAX)]);
    }
}
