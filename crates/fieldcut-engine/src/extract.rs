use crate::diagnostics::Diagnostic;
use fieldcut_types::ResolvedColumns;
use std::cmp::Ordering;

/// Per-cell output options
#[derive(Debug, Clone)]
pub struct ExtractOptions<'a> {
    pub out_separator: &'a str,
    pub downcase: bool,
}

/// Cut one row down to the resolved columns.
///
/// Missing cells read as empty strings. Returns `None` when there is nothing
/// to print: no resolved columns, or every extracted cell is empty.
pub fn extract(row: &[String], columns: &ResolvedColumns, options: &ExtractOptions) -> Option<String> {
    let cells: Vec<String> = columns
        .iter()
        .map(|column| {
            let value = row.get(column.index).map(|s| s.trim()).unwrap_or_default();
            if options.downcase {
                value.to_lowercase()
            } else {
                value.to_string()
            }
        })
        .collect();

    if cells.iter().all(String::is_empty) {
        return None;
    }
    Some(cells.join(options.out_separator))
}

/// Compare a row's width to the header's
pub fn check_width(line: usize, got: usize, expected: usize) -> Option<Diagnostic> {
    match got.cmp(&expected) {
        Ordering::Equal => None,
        Ordering::Greater => Some(Diagnostic::TooManyFields {
            line,
            got,
            expected,
        }),
        Ordering::Less => Some(Diagnostic::MissingFields {
            line,
            got,
            expected,
        }),
    }
}
