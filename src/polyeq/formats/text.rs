//! Plain text output
//!
//! One sentence per line, optionally preceded by the token list:
//!
//!     the token list is 3 x ^ 2 = 5
//!     this is an equation in 1 variable of degree 2

use super::registry::{FormatError, Formatter};
use crate::polyeq::analysis::{Analysis, Verdict};
use crate::polyeq::variables::VariableCount;

pub struct TextFormatter {
    show_tokens: bool,
}

impl TextFormatter {
    pub fn new(show_tokens: bool) -> Self {
        TextFormatter { show_tokens }
    }
}

/// The sentence reported for a verdict
pub fn verdict_message(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Equation {
            variables: VariableCount::One,
            degree,
        } => format!("this is an equation in 1 variable of degree {}", degree),
        Verdict::Equation { .. } => "this is an equation, but not in 1 variable".to_string(),
        Verdict::NotAnEquation => "this is not an equation".to_string(),
    }
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        let message = verdict_message(&analysis.verdict);
        if !self.show_tokens {
            return Ok(message);
        }

        let echo = match (&analysis.tokens, &analysis.lex_error) {
            (Some(tokens), _) => format!("the token list is {}", tokens),
            (None, Some(err)) => format!("the token list could not be built: {}", err),
            (None, None) => "the token list is empty".to_string(),
        };
        Ok(format!("{}\n{}", echo, message))
    }

    fn description(&self) -> &str {
        "Human readable verdict"
    }
}
