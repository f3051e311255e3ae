//! Output formats
//!
//! Formats render an [`Analysis`](crate::polyeq::analysis::Analysis) and are
//! looked up by name through [`FormatRegistry`].

pub mod registry;
pub mod serialized;
pub mod text;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use text::{verdict_message, TextFormatter};
