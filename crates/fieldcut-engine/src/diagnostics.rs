use std::fmt;

/// Advisory findings reported while resolving the header or reading rows.
/// None of them stop a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Index selector below 1
    NotOneBased { selector: String },
    /// Index selector past the last header column
    PastLastColumn { selector: String, columns: usize },
    /// Name or pattern selector that matched no header column
    NoMatch { selector: String },
    TooManyFields {
        line: usize,
        got: usize,
        expected: usize,
    },
    MissingFields {
        line: usize,
        got: usize,
        expected: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Debug,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::NoMatch { .. } => Severity::Debug,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NotOneBased { selector } => {
                write!(f, "Columns are 1-based: {} requested", selector)
            }
            Diagnostic::PastLastColumn { selector, columns } => write!(
                f,
                "Header has only {} columns: column {} requested",
                columns, selector
            ),
            Diagnostic::NoMatch { selector } => {
                write!(f, "Selector {} matched no column", selector)
            }
            Diagnostic::TooManyFields {
                line,
                got,
                expected,
            } => write!(
                f,
                "Line {}: too many fields ({} while header has {} fields)",
                line, got, expected
            ),
            Diagnostic::MissingFields {
                line,
                got,
                expected,
            } => write!(
                f,
                "Line {}: missing fields ({} while header has {} fields)",
                line, got, expected
            ),
        }
    }
}

/// Receiver for diagnostics. The CLI logs them; tests collect them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl DiagnosticSink for Discard {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
