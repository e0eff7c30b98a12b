//! The variable store accumulated during a run.

use std::collections::HashMap;

use crate::instruction::Segment;

/// A case-sensitive mapping from variable name to string value.
///
/// The store starts empty and grows only through `+INPUT:` directives during
/// execution. Resolving a name that was never written yields the empty
/// string — a running story is never aborted over a missing variable, and
/// the policy is uniform across a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    values: HashMap<String, String>,
}

impl VariableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, overwriting any prior value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a variable has been written.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of stored variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolve a variable for display: missing names yield `""`.
    pub fn resolve(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Render a text line by concatenating its segments, substituting the
    /// current value of each `$name` marker.
    pub fn render(&self, segments: &[Segment]) -> String {
        let mut line = String::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Variable(name) => line.push_str(self.resolve(name)),
            }
        }
        line
    }
}
