//! Per-line analysis
//!
//! This is the protocol a driver follows for every line:
//!
//! 1. tokenize the line (a lexing error means "not an equation");
//! 2. run the chosen recognizer over the whole token list, which succeeds only
//!    for a complete equation with no trailing tokens;
//! 3. only then classify the variables and read the degree.
//!
//! Each call to [`Analyzer::analyze`] starts from fresh recognizer state, so
//! results never depend on previously analyzed lines.

use crate::polyeq::lexing::{tokenize, Token, TokenList};
use crate::polyeq::recognizing::Backend;
use crate::polyeq::variables::{count_variables, distinct_variables, VariableCount};
use log::{debug, warn};
use serde::Serialize;

/// The outcome for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Verdict {
    NotAnEquation,
    Equation {
        variables: VariableCount,
        degree: u64,
    },
}

impl Verdict {
    pub fn is_equation(&self) -> bool {
        matches!(self, Verdict::Equation { .. })
    }

    /// The degree, for an equation in exactly one variable
    pub fn single_variable_degree(&self) -> Option<u64> {
        match self {
            Verdict::Equation {
                variables: VariableCount::One,
                degree,
            } => Some(*degree),
            _ => None,
        }
    }
}

/// Everything learned about one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The line without its line terminator
    pub source: String,
    pub backend: Backend,
    /// `None` when the line could not be tokenized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lex_error: Option<String>,
    /// Distinct identifier names, sorted; empty unless the line is an equation
    pub variable_names: Vec<String>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Analyzer {
    backend: Backend,
}

impl Analyzer {
    pub fn new(backend: Backend) -> Self {
        Analyzer { backend }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Classify an already tokenized line
    pub fn analyze_tokens(&self, tokens: &[Token]) -> Verdict {
        match self.backend.recognize(tokens) {
            Some(degree) => Verdict::Equation {
                variables: count_variables(tokens),
                degree: degree.value(),
            },
            None => Verdict::NotAnEquation,
        }
    }

    /// Tokenize and classify one line of text
    pub fn analyze(&self, line: &str) -> Analysis {
        let source = line.trim_end_matches(['\r', '\n']).to_string();

        let tokens = match tokenize(&source) {
            Ok(tokens) => tokens,
            Err(err) => {
                warn!("cannot tokenize '{}': {}", source, err);
                return Analysis {
                    source,
                    backend: self.backend,
                    tokens: None,
                    lex_error: Some(err.to_string()),
                    variable_names: Vec::new(),
                    verdict: Verdict::NotAnEquation,
                };
            }
        };

        let verdict = self.analyze_tokens(tokens.tokens());
        let variable_names = if verdict.is_equation() {
            distinct_variables(tokens.tokens())
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };
        debug!(
            "[{}] '{}' -> tokens [{}] -> {:?}",
            self.backend, source, tokens, verdict
        );

        Analysis {
            source,
            backend: self.backend,
            tokens: Some(tokens),
            lex_error: None,
            variable_names,
            verdict,
        }
    }
}

/// Analyze one line with the default backend
pub fn analyze(line: &str) -> Analysis {
    Analyzer::default().analyze(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_variable_equation() {
        let analysis = analyze("x^3 + x^2 = 5\n");
        assert_eq!(analysis.source, "x^3 + x^2 = 5");
        assert_eq!(
            analysis.verdict,
            Verdict::Equation {
                variables: VariableCount::One,
                degree: 3
            }
        );
        assert_eq!(analysis.verdict.single_variable_degree(), Some(3));
        assert_eq!(analysis.variable_names, vec!["x".to_string()]);
    }

    #[test]
    fn test_not_an_equation_has_no_variables() {
        let analysis = analyze("x + y");
        assert_eq!(analysis.verdict, Verdict::NotAnEquation);
        assert!(analysis.variable_names.is_empty());
        assert!(analysis.tokens.is_some());
    }

    #[test]
    fn test_lex_error_is_not_an_equation() {
        let analysis = analyze("x = 99999999999999999999999");
        assert_eq!(analysis.verdict, Verdict::NotAnEquation);
        assert!(analysis.tokens.is_none());
        assert!(analysis.lex_error.is_some());
    }

    #[test]
    fn test_many_variables_has_no_single_degree() {
        let analysis = analyze("x + y = 3");
        assert!(analysis.verdict.is_equation());
        assert_eq!(analysis.verdict.single_variable_degree(), None);
        assert_eq!(analysis.variable_names, vec!["x", "y"]);
    }

    #[test]
    fn test_analyzer_keeps_backend() {
        let analyzer = Analyzer::new(Backend::Combinator);
        assert_eq!(analyzer.backend(), Backend::Combinator);
        assert_eq!(analyzer.analyze("x = 1").backend, Backend::Combinator);
    }

    #[test]
    fn test_crlf_is_stripped() {
        assert_eq!(analyze("x = 1\r\n").source, "x = 1");
    }
}
