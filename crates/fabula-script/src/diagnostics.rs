//! Conversion of parse errors to renderable diagnostics.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::fmt;

use crate::parser::{ParseError, ParseErrorKind};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The story cannot be loaded.
    Error,
    /// The story loads, but an author probably wants to know.
    Warning,
}

/// A diagnostic message with source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Byte range of the offending input in the source.
    pub span: std::ops::Range<usize>,
    /// Human-readable description.
    pub message: String,
    /// Optional label for the underlined span.
    pub label: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(span: std::ops::Range<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(span: std::ops::Range<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Attach a label to the underlined span.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        let diagnostic = Diagnostic::error(error.span.clone(), error.kind.to_string());
        match &error.kind {
            ParseErrorKind::UnknownDirective(_) => {
                diagnostic.with_label("expected CLEAR, INPUT: <name>, or PAUSE")
            }
            ParseErrorKind::MissingInputName => {
                diagnostic.with_label("write +INPUT: <name> to capture input")
            }
            ParseErrorKind::InvalidInputName(_) => diagnostic
                .with_label("names are letters, digits, and underscores, not starting with a digit"),
            ParseErrorKind::UnexpectedArgument(_) => diagnostic.with_label("remove the argument"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{prefix}: {}", self.message)
    }
}

/// Render parse errors against their source using ariadne.
pub fn render_parse_errors(source: &str, filename: &str, errors: &[ParseError]) -> String {
    let diagnostics: Vec<Diagnostic> = errors.iter().map(Diagnostic::from).collect();
    render_diagnostics(source, filename, &diagnostics)
}

/// Render diagnostics using ariadne for pretty terminal output.
pub fn render_diagnostics(source: &str, filename: &str, diagnostics: &[Diagnostic]) -> String {
    let mut output = Vec::new();

    for diag in diagnostics {
        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
        };
        let color = match diag.severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
        };

        let span = (filename, diag.span.clone());
        let mut report = Report::build(kind, span).with_message(&diag.message);

        let label_text = diag.label.as_deref().unwrap_or(&diag.message);
        report = report.with_label(
            Label::new((filename, diag.span.clone()))
                .with_message(label_text)
                .with_color(color),
        );

        report
            .finish()
            .write((filename, Source::from(source)), &mut output)
            .ok();
    }

    String::from_utf8(output).unwrap_or_default()
}
