// Engine module - column selection and per-line extraction
// This layer sits between the typed configuration (types) and the CLI

pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod resolve;
pub mod row_source;
pub mod selector;

pub use diagnostics::{Diagnostic, DiagnosticSink, Discard, Severity};
pub use error::{Error, Result};
pub use extract::{check_width, extract, ExtractOptions};
pub use pipeline::{Outcome, Pipeline, RunSummary};
pub use resolve::resolve;
pub use row_source::{RowError, RowSource};
pub use selector::{parse_index, parse_selectors, split_tokens, SelectorOptions};

use fieldcut_types::{ExtractConfig, HeaderMap, ResolvedColumns};

// Façade API - stable entry points for the CLI layer

/// Resolve raw `-f` values against header cells in one call
pub fn resolve_header(
    config: &ExtractConfig,
    header_cells: &[String],
    sink: &mut dyn DiagnosticSink,
) -> Result<ResolvedColumns> {
    let selectors = parse_selectors(
        &config.fields,
        SelectorOptions {
            list_separator: config.list_separator,
            header_case: config.header_case,
        },
    )?;
    let header = HeaderMap::new(header_cells, config.duplicates);
    Ok(resolve(&header, &selectors, sink))
}
