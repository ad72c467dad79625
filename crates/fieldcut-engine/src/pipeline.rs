use crate::diagnostics::DiagnosticSink;
use crate::extract::{check_width, extract, ExtractOptions};
use crate::resolve::resolve;
use crate::row_source::{decode_line, RowError, RowSource};
use crate::selector::{parse_selectors, SelectorOptions};
use crate::{Error, Result};
use fieldcut_types::{ExtractConfig, HeaderMap, ResolvedColumns, Selector};
use std::io::{BufRead, Write};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was read to the end
    Completed,
    /// Header-print mode: the header was printed and the rest left unread
    HeaderPrinted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_skipped: usize,
    pub columns: usize,
}

/// The header state fixed by the first non-blank line
struct Header {
    width: usize,
    columns: ResolvedColumns,
}

/// Line-by-line extraction driven by an immutable [`ExtractConfig`].
///
/// Selectors are parsed once on construction; each call to [`Pipeline::run`]
/// treats its input as a fresh stream with its own header row.
pub struct Pipeline<'a> {
    config: &'a ExtractConfig,
    selectors: Vec<Selector>,
    source: RowSource,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a ExtractConfig) -> Result<Self> {
        config.validate()?;
        let selectors = parse_selectors(
            &config.fields,
            SelectorOptions {
                list_separator: config.list_separator,
                header_case: config.header_case,
            },
        )?;

        Ok(Self {
            config,
            selectors,
            source: RowSource::from_config(config),
        })
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<RunSummary> {
        let options = ExtractOptions {
            out_separator: &self.config.out_separator,
            downcase: self.config.downcase,
        };

        let mut summary = RunSummary {
            outcome: Outcome::Completed,
            lines_read: 0,
            lines_written: 0,
            lines_skipped: 0,
            columns: 0,
        };
        let mut header: Option<Header> = None;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines_read += 1;
            let line_number = summary.lines_read;

            let cells = match self.split(&buf) {
                Ok(Some(cells)) => cells,
                Ok(None) => continue,
                Err(source) if self.config.ignore => {
                    log::debug!("Line {}: skipped ({})", line_number, source);
                    summary.lines_skipped += 1;
                    continue;
                }
                Err(source) => {
                    return Err(Error::Row {
                        line: line_number,
                        source,
                    });
                }
            };

            if header.is_none() {
                let state = self.resolve_header(&cells, sink);
                summary.columns = state.columns.len();

                if self.config.header_print {
                    summary.lines_written +=
                        write_header_positions(writer, &state.columns, &options)?;
                    summary.outcome = Outcome::HeaderPrinted;
                    writer.flush()?;
                    return Ok(summary);
                }

                let echo = !self.config.no_header && self.config.header_keep;
                if echo && !state.columns.is_empty() {
                    let names: Vec<&str> = state.columns.names().collect();
                    writeln!(writer, "{}", names.join(options.out_separator))?;
                    summary.lines_written += 1;
                }

                header = Some(state);

                // Without a header row the first line is already data
                if !self.config.no_header {
                    continue;
                }
            }
            let Some(state) = header.as_ref() else {
                continue;
            };

            if let Some(diagnostic) = check_width(line_number, cells.len(), state.width) {
                sink.report(diagnostic);
            }

            if let Some(line) = extract(&cells, &state.columns, &options) {
                writeln!(writer, "{}", line)?;
                summary.lines_written += 1;
            }
        }

        writer.flush()?;
        Ok(summary)
    }

    /// Blank lines yield `Ok(None)`
    fn split(&self, raw: &[u8]) -> std::result::Result<Option<Vec<String>>, RowError> {
        let line = decode_line(raw)?;
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.source.parse(line).map(Some)
    }

    fn resolve_header(&self, cells: &[String], sink: &mut dyn DiagnosticSink) -> Header {
        let header = if self.config.no_header {
            HeaderMap::numbered(cells.len())
        } else {
            HeaderMap::new(cells, self.config.duplicates)
        };
        let columns = resolve(&header, &self.selectors, sink);
        log::debug!(
            "Resolved {} of {} header columns from {} selectors",
            columns.len(),
            header.len(),
            self.selectors.len()
        );

        Header {
            width: header.len(),
            columns,
        }
    }
}

/// `<name><sep><1-based output position>` per resolved column
fn write_header_positions<W: Write>(
    writer: &mut W,
    columns: &ResolvedColumns,
    options: &ExtractOptions,
) -> Result<usize> {
    for (position, column) in columns.iter().enumerate() {
        writeln!(writer, "{}{}{}", column.name, options.out_separator, position + 1)?;
    }
    Ok(columns.len())
}
