//! Recursive-descent recognizer
//!
//! One function per grammar unit, mutually recursive in the shape of the
//! grammar:
//!
//!     equation    ::= expression '=' expression
//!     expression  ::= ['-'] term { ('+' | '-') term }
//!     term        ::= number [ identifier [exponent] ] | identifier [exponent]
//!     exponent    ::= '^' number
//!
//! Every `accept_*` function takes a cursor and the degree accumulated so far
//! and returns `Some((cursor, degree))` past the recognized unit, or `None`.
//! Both inputs are values, so a `None` leaves the caller exactly where it was.
//! Failure short-circuits through `?`: the first unit that does not match
//! fails every enclosing unit.

use crate::polyeq::lexing::Token;
use crate::polyeq::recognizing::cursor::Cursor;
use crate::polyeq::recognizing::degree::Degree;
use log::trace;

/// A recognized equation prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognition<'a> {
    /// The tokens after the right-hand expression
    pub rest: Cursor<'a>,
    pub degree: Degree,
}

/// Optional `'^' <number>` after a variable.
///
/// Without `^` this is a zero-width match recording the implicit exponent 1.
pub fn accept_exponent<'a>(cursor: Cursor<'a>, degree: Degree) -> Option<(Cursor<'a>, Degree)> {
    let Some(after_caret) = cursor.accept_symbol('^') else {
        return Some((cursor, degree.with_implicit_exponent()));
    };
    if after_caret.accept_symbol('-').is_some() {
        trace!("negative exponent at token {}", after_caret.position());
        return None;
    }
    let (next, exponent) = after_caret.accept_number()?;
    Some((next, degree.with_exponent(exponent)))
}

/// A constant, a variable, or a coefficient times a variable, each variable
/// with an optional exponent.
pub fn accept_term<'a>(cursor: Cursor<'a>, degree: Degree) -> Option<(Cursor<'a>, Degree)> {
    if let Some((after_number, _)) = cursor.accept_number() {
        return match after_number.accept_identifier() {
            Some((after_variable, _)) => accept_exponent(after_variable, degree),
            None => Some((after_number, degree)),
        };
    }
    let (after_variable, _) = cursor.accept_identifier()?;
    accept_exponent(after_variable, degree)
}

/// `['-'] term { ('+' | '-') term }`
///
/// The unary minus is only allowed before the first term. An operator not
/// followed by a term fails the whole expression.
pub fn accept_expression<'a>(
    cursor: Cursor<'a>,
    degree: Degree,
) -> Option<(Cursor<'a>, Degree)> {
    let start = cursor.accept_symbol('-').unwrap_or(cursor);
    let (mut cursor, mut degree) = accept_term(start, degree)?;

    while let Some(after_operator) = cursor
        .accept_symbol('+')
        .or_else(|| cursor.accept_symbol('-'))
    {
        (cursor, degree) = accept_term(after_operator, degree)?;
    }

    Some((cursor, degree))
}

/// `expression '=' expression`, starting from a fresh degree.
///
/// Only validates a prefix: tokens after the right-hand side are left in
/// [`Recognition::rest`] for the caller to check.
pub fn recognize_equation(cursor: Cursor<'_>) -> Option<Recognition<'_>> {
    let (cursor, degree) = accept_expression(cursor, Degree::baseline())?;
    let cursor = cursor.accept_symbol('=')?;
    let (rest, degree) = accept_expression(cursor, degree)?;
    Some(Recognition { rest, degree })
}

/// Recognize `tokens` as one complete equation.
///
/// Returns the degree only when the equation recognizer succeeds and every
/// token has been consumed.
pub fn recognize_tokens(tokens: &[Token]) -> Option<Degree> {
    let recognition = recognize_equation(Cursor::new(tokens))?;
    if !recognition.rest.is_exhausted() {
        trace!(
            "trailing input after equation at token {}: {:?}",
            recognition.rest.position(),
            recognition.rest.remaining()
        );
        return None;
    }
    Some(recognition.degree)
}
