//! Author-facing checks on stories that already parse.

use std::collections::HashSet;

use crate::diagnostics::Diagnostic;
use crate::scanner;

/// Warn about every `$name` marker whose name no `+INPUT:` directive in the
/// story captures; such a marker always renders as the empty string.
///
/// Capture order is deliberately ignored here: a marker that merely runs
/// before its `+INPUT:` may be intentional (an empty first rendering), but a
/// name nothing ever captures is almost certainly a typo.
pub fn lint(source: &str) -> Vec<Diagnostic> {
    let mut captured: HashSet<&str> = HashSet::new();
    for (line, _) in lines_with_offsets(source) {
        if let Some(rest) = line.trim_start().strip_prefix('+')
            && let Some(name) = rest.trim().strip_prefix("INPUT")
            && let Some(name) = name.trim_start().strip_prefix(':')
        {
            captured.insert(name.trim());
        }
    }

    let mut diagnostics = Vec::new();
    for (line, offset) in lines_with_offsets(source) {
        if line.trim_start().starts_with('+') {
            continue;
        }
        for (name, span) in scanner::variable_spans(line) {
            if !captured.contains(name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        offset + span.start..offset + span.end,
                        format!("variable \"{name}\" is never captured by an +INPUT: directive"),
                    )
                    .with_label("this always renders as the empty string"),
                );
            }
        }
    }

    diagnostics
}

/// Source lines with byte offsets, using the same line rules as the parser:
/// a trailing newline terminates the last line, `\r` before it is dropped.
fn lines_with_offsets(source: &str) -> Vec<(&str, usize)> {
    let mut raw_lines: Vec<&str> = source.split('\n').collect();
    if source.ends_with('\n') {
        raw_lines.pop();
    }

    let mut lines = Vec::with_capacity(raw_lines.len());
    let mut offset = 0;
    for raw in raw_lines {
        lines.push((raw.strip_suffix('\r').unwrap_or(raw), offset));
        offset += raw.len() + 1;
    }
    lines
}
