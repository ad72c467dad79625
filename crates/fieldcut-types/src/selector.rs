use regex::Regex;
use std::fmt;

/// How a name or pattern selector compares against header names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Sensitive,
    Insensitive,
}

impl CaseMode {
    pub fn is_insensitive(self) -> bool {
        matches!(self, CaseMode::Insensitive)
    }

    /// Compare two names under this case mode
    pub fn names_equal(self, a: &str, b: &str) -> bool {
        match self {
            CaseMode::Sensitive => a == b,
            CaseMode::Insensitive => a == b || a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// A user-supplied column selector, classified once at parse time.
///
/// Every variant keeps the token as the user typed it (`raw`) so that
/// diagnostics can quote it back.
#[derive(Debug, Clone)]
pub enum Selector {
    /// 1-based column position. Values below 1 are kept so the resolver can
    /// report them.
    Index { raw: String, position: i64 },

    /// Inclusive 1-based range. A missing end means the last column.
    Range {
        raw: String,
        start: i64,
        end: Option<i64>,
    },

    /// Regex searched (not fully matched) against every header name
    Pattern { raw: String, regex: Regex },

    /// Exact header name
    Name { raw: String, case: CaseMode },
}

impl Selector {
    pub fn raw(&self) -> &str {
        match self {
            Selector::Index { raw, .. }
            | Selector::Range { raw, .. }
            | Selector::Pattern { raw, .. }
            | Selector::Name { raw, .. } => raw,
        }
    }

    pub fn kind(&self) -> SelectorKind {
        match self {
            Selector::Index { .. } => SelectorKind::Index,
            Selector::Range { .. } => SelectorKind::Range,
            Selector::Pattern { .. } => SelectorKind::Pattern,
            Selector::Name { .. } => SelectorKind::Name,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

/// Fieldless mirror of [`Selector`], handy for assertions and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Index,
    Range,
    Pattern,
    Name,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorKind::Index => write!(f, "index"),
            SelectorKind::Range => write!(f, "range"),
            SelectorKind::Pattern => write!(f, "pattern"),
            SelectorKind::Name => write!(f, "name"),
        }
    }
}
