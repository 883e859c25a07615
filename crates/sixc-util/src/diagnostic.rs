//! Diagnostic severity and formatting shared by every stage's error type.
//!
//! Grounded in the teacher's `diagnostic` module (`Level`, `Diagnostic`,
//! `DiagnosticBuilder`), trimmed down: no diagnostic codes, no multi-span
//! labels, no source-map-backed snippets — this compiler reports one error
//! per run (spec: "halts on the first error in a stage") against a single
//! source string, so a message plus a [`Span`] is enough.

use crate::span::Span;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message, rendered as `error at 3:5: undeclared name 'x'`.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self { level: Level::Error, message: message.into(), span }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.level, self.span, self.message)
    }
}
