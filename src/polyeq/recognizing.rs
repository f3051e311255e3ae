//! Equation recognizers
//!
//! Two recognizer designs run side by side:
//!
//! - `descent`: hand-written mutually recursive accept-functions over an
//!   immutable [`Cursor`](cursor::Cursor). This is the default and the one
//!   the rest of the crate is specified against.
//! - `combinators`: the same grammar as chumsky combinators.
//!
//! Both take a token slice and answer with `Some(degree)` for a complete
//! equation or `None`. Comparing them is part of the test suite.

pub mod combinators;
pub mod cursor;
pub mod degree;
pub mod descent;

pub use cursor::Cursor;
pub use degree::Degree;
pub use descent::{recognize_equation, Recognition};

use crate::polyeq::lexing::Token;
use polyeq_config::BackendKind;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which recognizer implementation to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Hand-written recursive descent (default)
    #[default]
    Descent,
    /// chumsky parser combinators
    Combinator,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Descent, Backend::Combinator];

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Descent => "descent",
            Backend::Combinator => "combinator",
        }
    }

    /// Recognize `tokens` as one complete equation, returning its degree
    pub fn recognize(&self, tokens: &[Token]) -> Option<Degree> {
        match self {
            Backend::Descent => descent::recognize_tokens(tokens),
            Backend::Combinator => combinators::recognize_tokens(tokens),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackend(pub String);

impl fmt::Display for UnknownBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown backend '{}' (expected 'descent' or 'combinator')",
            self.0
        )
    }
}

impl std::error::Error for UnknownBackend {}

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Backend::ALL
            .into_iter()
            .find(|backend| backend.name() == s)
            .ok_or_else(|| UnknownBackend(s.to_string()))
    }
}

impl From<BackendKind> for Backend {
    fn from(kind: BackendKind) -> Self {
        match kind {
            BackendKind::Descent => Backend::Descent,
            BackendKind::Combinator => Backend::Combinator,
        }
    }
}
