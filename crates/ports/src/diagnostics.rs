// crates/ports/src/diagnostics.rs
use std::fmt;

/// Non-fatal anomalies noticed while producing entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The collection's type tag was not the one the host normally supplies.
    UnexpectedCollectionType { expected: String, found: Option<String> },
    /// Preserve-mtime was requested but the handle had no usable timestamp.
    MissingTimestamp { index: usize, path: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCollectionType { expected, found: Some(found) } => {
                write!(f, "collection type was {found}, expected {expected}")
            }
            Self::UnexpectedCollectionType { expected, found: None } => {
                write!(f, "collection type is unknown, expected {expected}")
            }
            Self::MissingTimestamp { index, path } => {
                write!(f, "no usable last-modified time for entry {index} ({path})")
            }
        }
    }
}

/// Receives diagnostics; the host decides where they end up.
pub trait DiagnosticsSink {
    fn warn(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticsSink for F
where
    F: Fn(&Diagnostic),
{
    fn warn(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn warn(&self, _diagnostic: &Diagnostic) {}
}
