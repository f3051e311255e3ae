//! Interactive session
//!
//! Prompts for a line, analyzes it, prints the rendered verdict, and repeats
//! until a line starting with the sentinel (or end of input). Generic over the
//! reader and writer so the whole loop runs against in-memory buffers in
//! tests.

use crate::polyeq::analysis::Analyzer;
use crate::polyeq::formats::{FormatError, FormatRegistry};
use log::{debug, info};
use polyeq_config::PolyeqConfig;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Text and format used by the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub prompt: String,
    /// A line starting with this ends the session; empty means only end of input does
    pub sentinel: String,
    pub farewell: String,
    /// Name of a format in the registry
    pub format: String,
}

impl SessionOptions {
    pub fn from_config(config: &PolyeqConfig) -> Self {
        SessionOptions {
            prompt: config.session.prompt.clone(),
            sentinel: config.session.sentinel.clone(),
            farewell: config.session.farewell.clone(),
            format: config.output.format.clone(),
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            prompt: "give an equation: ".to_string(),
            sentinel: "!".to_string(),
            farewell: "good bye".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Counts for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines analyzed, not counting the sentinel
    pub lines: usize,
    /// Lines recognized as equations
    pub equations: usize,
}

#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    Format(FormatError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(err) => write!(f, "I/O error: {}", err),
            SessionError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            SessionError::Format(err) => Some(err),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err)
    }
}

impl From<FormatError> for SessionError {
    fn from(err: FormatError) -> Self {
        SessionError::Format(err)
    }
}

pub struct Session<'r> {
    analyzer: Analyzer,
    registry: &'r FormatRegistry,
    options: SessionOptions,
}

impl<'r> Session<'r> {
    pub fn new(analyzer: Analyzer, registry: &'r FormatRegistry, options: SessionOptions) -> Self {
        Session {
            analyzer,
            registry,
            options,
        }
    }

    fn is_sentinel(&self, line: &str) -> bool {
        !self.options.sentinel.is_empty() && line.starts_with(&self.options.sentinel)
    }

    /// Run the loop until the sentinel or end of input
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<SessionSummary, SessionError> {
        // Fail before the first prompt rather than after the first line
        if !self.registry.has(&self.options.format) {
            return Err(FormatError::FormatNotFound(self.options.format.clone()).into());
        }

        let mut summary = SessionSummary::default();
        let mut buffer = Vec::new();

        loop {
            write!(output, "{}", self.options.prompt)?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                // Keep the farewell off the prompt line
                writeln!(output)?;
                break;
            }
            // Invalid UTF-8 becomes U+FFFD, which no token accepts
            let line = String::from_utf8_lossy(&buffer);
            if self.is_sentinel(&line) {
                break;
            }

            let analysis = self.analyzer.analyze(&line);
            let rendered = self.registry.serialize(&analysis, &self.options.format)?;
            writeln!(output, "{}", rendered)?;

            summary.lines += 1;
            if analysis.verdict.is_equation() {
                summary.equations += 1;
            }
        }

        writeln!(output, "{}", self.options.farewell)?;
        info!(
            "session ended after {} lines, {} equations",
            summary.lines, summary.equations
        );
        Ok(summary)
    }
}
