//! The line classifier and directive grammar.
//!
//! Parsing is line-oriented: the source is split on line boundaries and each
//! line is classified on its own — there are no multi-line directives and no
//! continuations. A line whose first non-blank character is `+` is matched
//! against the directive grammar; every other line becomes a [`Instruction::Text`]
//! whose content comes from the interpolation scanner, untrimmed.
//!
//! All malformed lines are collected before the parser gives up, so an author
//! sees every problem in one pass. On any error no [`Story`] is produced.

use fabula_core::{Instruction, Story};

use crate::scanner;

/// Why a directive line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The keyword after `+` is not a known directive.
    #[error("unknown directive: +{0}")]
    UnknownDirective(String),

    /// `+INPUT:` with nothing after the colon.
    #[error("+INPUT: requires a variable name")]
    MissingInputName,

    /// `+INPUT:` with a name that is not a valid identifier.
    #[error("invalid variable name: {0:?}")]
    InvalidInputName(String),

    /// `+CLEAR` or `+PAUSE` followed by extra content.
    #[error("+{0} takes no argument")]
    UnexpectedArgument(String),
}

/// A parse error with its source line and byte span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte range of the offending directive in the source.
    pub span: std::ops::Range<usize>,
    /// One-based source line number.
    pub line: usize,
}

/// Parse story source text into a [`Story`].
///
/// Returns every parse error found; a story is only produced when the whole
/// source is well-formed.
pub fn parse(source: &str) -> Result<Story, Vec<ParseError>> {
    if source.is_empty() {
        return Ok(Story::new(Vec::new()));
    }

    let mut instructions = Vec::new();
    let mut errors = Vec::new();
    let mut offset = 0usize;

    let mut lines: Vec<&str> = source.split('\n').collect();
    // A trailing newline at EOF is a line terminator, not an extra blank line
    if source.ends_with('\n') {
        lines.pop();
    }

    for (index, raw) in lines.into_iter().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim_start();

        if let Some(rest) = trimmed.strip_prefix('+') {
            let indent = line.len() - trimmed.len();
            match parse_directive(rest) {
                Ok(instruction) => instructions.push(instruction),
                Err(kind) => errors.push(ParseError {
                    kind,
                    span: offset + indent..offset + line.len(),
                    line: index + 1,
                }),
            }
        } else {
            instructions.push(Instruction::Text(scanner::scan(line)));
        }

        offset += raw.len() + 1;
    }

    if errors.is_empty() {
        Ok(Story::new(instructions))
    } else {
        Err(errors)
    }
}

/// Match the text after the `+` sigil against the directive grammar.
fn parse_directive(rest: &str) -> Result<Instruction, ParseErrorKind> {
    let body = rest.trim();

    if body == "CLEAR" {
        return Ok(Instruction::Clear);
    }
    if body == "PAUSE" {
        return Ok(Instruction::Pause);
    }
    // The colon may be detached from the keyword: `+INPUT : name` is sloppy
    // but unambiguous
    if let Some(after) = body.strip_prefix("INPUT")
        && let Some(name) = after.trim_start().strip_prefix(':')
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseErrorKind::MissingInputName);
        }
        if !is_identifier(name) {
            return Err(ParseErrorKind::InvalidInputName(name.to_string()));
        }
        return Ok(Instruction::Input(name.to_string()));
    }
    if body == "INPUT" {
        // Forgotten colon reads better as a missing name than an unknown word
        return Err(ParseErrorKind::MissingInputName);
    }

    let keyword: String = body
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if keyword == "CLEAR" || keyword == "PAUSE" {
        Err(ParseErrorKind::UnexpectedArgument(keyword))
    } else {
        Err(ParseErrorKind::UnknownDirective(keyword))
    }
}

/// Variable names are `[A-Za-z_][A-Za-z0-9_]*`, matching the interpolation
/// scanner so that every `+INPUT:` name is reachable from a `$name` marker.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
