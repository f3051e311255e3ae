//! Shared configuration loader for polyeq.
//!
//! `defaults/polyeq.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. The command line layers an optional project
//! file, an explicit user file and per-flag overrides on top of those defaults
//! via [`Loader`] before deserializing into [`PolyeqConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};

pub use config::ConfigError;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/polyeq.default.toml");

/// Top-level configuration consumed by the polyeq binary.
#[derive(Debug, Clone, Deserialize)]
pub struct PolyeqConfig {
    pub session: SessionConfig,
    pub recognizer: RecognizerConfig,
    pub output: OutputConfig,
}

/// Knobs for the interactive line loop.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub prompt: String,
    pub sentinel: String,
    pub farewell: String,
    pub show_tokens: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerConfig {
    pub backend: BackendKind,
}

/// Which recognizer implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    Descent,
    Combinator,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered output format.
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PolyeqConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
