//! Instruction and text-segment types produced by the parser.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fragment of one line of narrative text.
///
/// A text line is the concatenation of its segments, in source order. Only
/// [`Segment::Variable`] fragments change between renders; everything else
/// passes through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Verbatim text.
    Literal(String),
    /// A `$name` interpolation marker, resolved against the variable store
    /// at display time.
    Variable(String),
}

impl Segment {
    /// Build a literal segment.
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    /// Build a variable-reference segment.
    pub fn variable(name: impl Into<String>) -> Self {
        Segment::Variable(name.into())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => write!(f, "{text}"),
            Segment::Variable(name) => write!(f, "${name}"),
        }
    }
}

/// One executable instruction of a story, one per effective source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// Display one line of narrative prose.
    Text(Vec<Segment>),
    /// Clear previously displayed output.
    Clear,
    /// Capture a line of user input into the named variable.
    Input(String),
    /// Wait for the user to press a key before continuing.
    Pause,
}

impl Instruction {
    /// Build a text instruction from segments.
    pub fn text(segments: Vec<Segment>) -> Self {
        Instruction::Text(segments)
    }

    /// Whether executing this instruction suspends the run until the caller
    /// resumes it (`Input` and `Pause`).
    pub fn suspends(&self) -> bool {
        matches!(self, Instruction::Input(_) | Instruction::Pause)
    }
}

impl fmt::Display for Instruction {
    /// Render the instruction in source form (`+CLEAR`, `+INPUT: name`,
    /// `+PAUSE`, or the text line with its `$name` markers).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Text(segments) => {
                for segment in segments {
                    write!(f, "{segment}")?;
                }
                Ok(())
            }
            Instruction::Clear => write!(f, "+CLEAR"),
            Instruction::Input(name) => write!(f, "+INPUT: {name}"),
            Instruction::Pause => write!(f, "+PAUSE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_display() {
        assert_eq!(Segment::literal("Hello, ").to_string(), "Hello, ");
        assert_eq!(Segment::variable("name").to_string(), "$name");
    }

    #[test]
    fn instruction_display_round_trips_source_form() {
        let text = Instruction::text(vec![
            Segment::literal("Hello, "),
            Segment::variable("name"),
            Segment::literal("!"),
        ]);
        assert_eq!(text.to_string(), "Hello, $name!");
        assert_eq!(Instruction::Clear.to_string(), "+CLEAR");
        assert_eq!(Instruction::Input("hero".into()).to_string(), "+INPUT: hero");
        assert_eq!(Instruction::Pause.to_string(), "+PAUSE");
    }

    #[test]
    fn suspends() {
        assert!(Instruction::Input("x".into()).suspends());
        assert!(Instruction::Pause.suspends());
        assert!(!Instruction::Clear.suspends());
        assert!(!Instruction::text(vec![]).suspends());
    }

    #[test]
    fn serde_round_trip() {
        let instruction = Instruction::text(vec![
            Segment::literal("Price: "),
            Segment::variable("amount"),
        ]);
        let json = serde_json::to_string(&instruction).unwrap();
        let back: Instruction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instruction);
    }
}
