//! Variable-count analysis
//!
//! Classifies a line by the number of distinct identifier names it contains.
//! This walks the whole token slice from the start on its own; it shares no
//! cursor or degree with the recognizers and knows nothing about whether the
//! tokens form an equation.

use crate::polyeq::lexing::Token;
use serde::Serialize;
use std::collections::BTreeSet;

/// How many distinct variables a line uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableCount {
    /// A purely numeric line
    Zero,
    /// One name, however often it occurs
    One,
    /// Two or more distinct names
    Many,
}

impl VariableCount {
    fn from_len(len: usize) -> Self {
        match len {
            0 => VariableCount::Zero,
            1 => VariableCount::One,
            _ => VariableCount::Many,
        }
    }
}

/// The distinct identifier names in `tokens`, sorted
pub fn distinct_variables(tokens: &[Token]) -> BTreeSet<&str> {
    tokens.iter().filter_map(Token::as_identifier).collect()
}

pub fn count_variables(tokens: &[Token]) -> VariableCount {
    VariableCount::from_len(distinct_variables(tokens).len())
}
