//! The degree accumulator
//!
//! Degree is threaded through the recognizers as a plain value: each
//! acceptor takes the degree accumulated so far and hands back an updated
//! copy alongside the advanced cursor. Every recognition starts from
//! [`Degree::baseline`], so nothing carries over between lines.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Degree {
    /// Highest exponent written explicitly as `^n`; `None` until one is seen
    highest_exponent: Option<u64>,
    /// Whether a variable appeared without `^`, i.e. with exponent 1
    implicit_exponent: bool,
}

impl Degree {
    /// The state before any term has been recognized
    pub fn baseline() -> Self {
        Degree::default()
    }

    /// Record an explicit `^exponent`
    pub fn with_exponent(self, exponent: u64) -> Self {
        let highest = match self.highest_exponent {
            Some(current) => current.max(exponent),
            None => exponent,
        };
        Degree {
            highest_exponent: Some(highest),
            ..self
        }
    }

    /// Record a variable written without an exponent
    pub fn with_implicit_exponent(self) -> Self {
        Degree {
            implicit_exponent: true,
            ..self
        }
    }

    /// Combine the observations of two independently recognized parts
    pub fn merge(self, other: Degree) -> Self {
        let merged = Degree {
            implicit_exponent: self.implicit_exponent || other.implicit_exponent,
            ..self
        };
        match other.highest_exponent {
            Some(exponent) => merged.with_exponent(exponent),
            None => merged,
        }
    }

    pub fn highest_exponent(&self) -> Option<u64> {
        self.highest_exponent
    }

    /// The reported degree.
    ///
    /// A variable without `^` counts as exponent 1, so an equation whose
    /// variables never carry an explicit exponent has degree 1. An equation
    /// with no variables at all has degree 0.
    pub fn value(&self) -> u64 {
        let implicit = if self.implicit_exponent { 1 } else { 0 };
        self.highest_exponent.unwrap_or(0).max(implicit)
    }
}
