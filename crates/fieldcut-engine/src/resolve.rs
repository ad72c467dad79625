use crate::diagnostics::{Diagnostic, DiagnosticSink};
use fieldcut_types::{HeaderMap, ResolvedColumns, Selector};

/// Resolve selectors against the header into the ordered output columns.
///
/// Columns come out in selector order, and in header order within a single
/// selector. A name added by an earlier selector is never added again. An
/// empty selector list selects every column.
pub fn resolve(
    header: &HeaderMap,
    selectors: &[Selector],
    sink: &mut dyn DiagnosticSink,
) -> ResolvedColumns {
    let mut resolved = ResolvedColumns::new();

    if selectors.is_empty() {
        for column in header.columns() {
            insert_by_name(header, &mut resolved, &column.name, column.index);
        }
        return resolved;
    }

    for selector in selectors {
        let matched = match selector {
            Selector::Index { raw, position } => {
                resolve_position(header, &mut resolved, raw, *position, sink)
            }
            Selector::Range { raw, start, end } => {
                resolve_range(header, &mut resolved, raw, *start, *end, sink)
            }
            Selector::Pattern { regex, .. } => {
                resolve_matching(header, &mut resolved, |name| regex.is_match(name))
            }
            Selector::Name { raw, case } => {
                resolve_matching(header, &mut resolved, |name| case.names_equal(raw, name))
            }
        };

        if !matched && matches!(selector, Selector::Pattern { .. } | Selector::Name { .. }) {
            sink.report(Diagnostic::NoMatch {
                selector: selector.raw().to_string(),
            });
        }
    }

    resolved
}

/// Checks a 1-based position against the header width, reporting when it
/// falls outside. Returns the 0-based position when usable.
fn checked_position(
    header: &HeaderMap,
    raw: &str,
    position: i64,
    sink: &mut dyn DiagnosticSink,
) -> Option<usize> {
    if position < 1 {
        sink.report(Diagnostic::NotOneBased {
            selector: raw.to_string(),
        });
        return None;
    }
    let zero_based = usize::try_from(position - 1).ok();
    match zero_based {
        Some(p) if p < header.len() => Some(p),
        _ => {
            sink.report(Diagnostic::PastLastColumn {
                selector: raw.to_string(),
                columns: header.len(),
            });
            None
        }
    }
}

fn resolve_position(
    header: &HeaderMap,
    resolved: &mut ResolvedColumns,
    raw: &str,
    position: i64,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    let Some(p) = checked_position(header, raw, position, sink) else {
        return false;
    };
    if let Some(column) = header.at(p) {
        resolved.insert(&column.name, column.index);
    }
    true
}

fn resolve_range(
    header: &HeaderMap,
    resolved: &mut ResolvedColumns,
    raw: &str,
    start: i64,
    end: Option<i64>,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    let Some(first) = checked_position(header, raw, start, sink) else {
        return false;
    };
    let last = match end {
        Some(end) if end < 1 => return false,
        Some(end) => usize::try_from(end - 1)
            .unwrap_or(usize::MAX)
            .min(header.len() - 1),
        None => header.len() - 1,
    };

    for column in header.columns().iter().take(last + 1).skip(first) {
        resolved.insert(&column.name, column.index);
    }
    true
}

fn resolve_matching(
    header: &HeaderMap,
    resolved: &mut ResolvedColumns,
    is_match: impl Fn(&str) -> bool,
) -> bool {
    let mut matched = false;
    for column in header.columns() {
        if is_match(&column.name) {
            matched = true;
            insert_by_name(header, resolved, &column.name, column.index);
        }
    }
    matched
}

/// Name-based matches read the index the header lookup picked for the name,
/// so the duplicate policy decides which repeated column is used.
fn insert_by_name(header: &HeaderMap, resolved: &mut ResolvedColumns, name: &str, fallback: usize) {
    let index = header.index_of(name).unwrap_or(fallback);
    resolved.insert(name, index);
}
