//! The interpolation scanner for narrative lines.
//!
//! Scans one line of prose left to right and splits it into literal text and
//! `$name` variable references. A variable name is `[A-Za-z_][A-Za-z0-9_]*`:
//! digits and underscores may continue a name but a digit cannot start one,
//! so currency-like text such as `$5` stays literal. A `$` not followed by a
//! name character is likewise a literal dollar sign, never an error.

use fabula_core::Segment;
use logos::Logos;

/// Raw logos token over one line of prose. Adjacent literal pieces are merged
/// after scanning.
#[derive(Logos, Debug)]
enum RawSegment {
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
    Variable,

    #[regex(r"[^$]+")]
    Text,

    #[token("$")]
    Dollar,
}

/// Scan one line into segments.
///
/// A blank line yields a single empty literal so that blank source lines
/// remain blank output lines.
pub fn scan(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut lexer = RawSegment::lexer(line);

    while let Some(result) = lexer.next() {
        match result {
            Ok(RawSegment::Variable) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                // Skip the `$` sigil, keep the name
                segments.push(Segment::variable(&lexer.slice()[1..]));
            }
            Ok(RawSegment::Text) | Ok(RawSegment::Dollar) | Err(()) => {
                literal.push_str(lexer.slice());
            }
        }
    }

    if !literal.is_empty() || segments.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Every `$name` marker in one line with its byte span, sigil included.
pub(crate) fn variable_spans(line: &str) -> Vec<(String, std::ops::Range<usize>)> {
    let mut spans = Vec::new();
    let mut lexer = RawSegment::lexer(line);

    while let Some(result) = lexer.next() {
        if let Ok(RawSegment::Variable) = result {
            spans.push((lexer.slice()[1..].to_string(), lexer.span()));
        }
    }

    spans
}
