//! Parser and diagnostics for the Fabula `.story` scripting language.
//!
//! A story file is plain narrative text interleaved with directive lines.
//! A line whose first non-blank character is `+` is a directive (`+CLEAR`,
//! `+INPUT: name`, `+PAUSE`); every other line is prose, displayed verbatim
//! except for `$name` interpolation markers which are substituted from the
//! variable store at display time.
//!
//! There is no escape for a literal `+` at the start of a line or for a
//! literal `$name` sequence. This is a known limitation of the format.

/// Conversion of parse errors to renderable diagnostics.
pub mod diagnostics;
/// Author-facing checks on stories that already parse.
pub mod lint;
/// The line classifier and directive grammar.
pub mod parser;
/// The interpolation scanner for narrative lines.
pub mod scanner;

use std::path::Path;

use fabula_core::Story;

pub use lint::lint;
pub use parser::{ParseError, ParseErrorKind, parse};

/// Errors from loading a story file from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The path that failed to load.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file was read but failed to parse.
    #[error("story failed to parse with {} error(s)", .0.len())]
    Parse(Vec<ParseError>),
}

/// Read and parse a single `.story` file.
pub fn parse_file(path: &Path) -> Result<Story, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&source).map_err(LoadError::Parse)
}
