//! Parser combinator backend for the equation grammar.
//!
//! The same language as the descent recognizer, written with chumsky. Each
//! grammar unit produces the [`Degree`] observed inside it and the pieces are
//! folded together with [`Degree::merge`], so there is no state to thread.
//! The equation is anchored with `end()`, which makes this backend implement
//! the whole-input contract directly.
//!
//! chumsky backtracks where the descent recognizer fails outright (an `^`
//! without a natural number, an operator without a term). The leftover token
//! can never start anything the grammar expects next, so both backends accept
//! exactly the same inputs.

use chumsky::prelude::*;
use log::trace;

use crate::polyeq::lexing::Token;
use crate::polyeq::recognizing::degree::Degree;

/// Type alias for parser error
pub type ParserError = Simple<Token>;

/// Helper: match a specific symbol, ignoring it
fn symbol(c: char) -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(Token::Symbol(c)).ignored()
}

fn number() -> impl Parser<Token, u64, Error = ParserError> + Clone {
    chumsky::select! { Token::Number(value) => value }
}

fn identifier() -> impl Parser<Token, String, Error = ParserError> + Clone {
    chumsky::select! { Token::Identifier(name) => name }
}

/// Optional `^n` after a variable; absence means exponent 1
fn exponent() -> impl Parser<Token, Degree, Error = ParserError> + Clone {
    symbol('^')
        .ignore_then(number())
        .or_not()
        .map(|exponent| match exponent {
            Some(value) => Degree::baseline().with_exponent(value),
            None => Degree::baseline().with_implicit_exponent(),
        })
}

fn term() -> impl Parser<Token, Degree, Error = ParserError> + Clone {
    let variable = identifier().ignore_then(exponent());

    number()
        .ignore_then(variable.clone().or_not())
        .map(Option::unwrap_or_default)
        .or(variable)
}

fn expression() -> impl Parser<Token, Degree, Error = ParserError> + Clone {
    let operator = symbol('+').or(symbol('-'));

    symbol('-')
        .or_not()
        .ignore_then(term())
        .then(operator.ignore_then(term()).repeated())
        .foldl(Degree::merge)
}

fn equation() -> impl Parser<Token, Degree, Error = ParserError> {
    expression()
        .then_ignore(symbol('='))
        .then(expression())
        .then_ignore(end())
        .map(|(left, right)| left.merge(right))
}

/// Parse a complete token list, keeping chumsky's errors.
///
/// Error spans are token indices, which is enough for a caller that wants to
/// point at where recognition stopped.
pub fn parse(tokens: &[Token]) -> Result<Degree, Vec<ParserError>> {
    equation().parse(tokens.to_vec())
}

/// Recognize `tokens` as one complete equation
pub fn recognize_tokens(tokens: &[Token]) -> Option<Degree> {
    match parse(tokens) {
        Ok(degree) => Some(degree),
        Err(errors) => {
            if let Some(first) = errors.first() {
                trace!("combinator rejected input at token {:?}", first.span());
            }
            None
        }
    }
}
