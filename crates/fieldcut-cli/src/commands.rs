use crate::args::Cli;
use crate::config::{FileConfig, Settings};
use crate::input::Source;
use crate::logging::{self, LogSink};
use anyhow::{Context, Result};
use fieldcut_engine::{DiagnosticSink, Discard, Outcome, Pipeline};
use std::io::{self, BufWriter, Write};

pub fn run(cli: Cli) -> Result<()> {
    let file_config = FileConfig::load(cli.config.as_deref())?;
    let settings = Settings::build(&cli, &file_config)?;
    logging::init(settings.log_level.to_filter());

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    extract(&settings, &Source::from_paths(&cli.files), &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Run every source through one pipeline, writing to `writer`
pub fn extract<W: Write>(settings: &Settings, sources: &[Source], writer: &mut W) -> Result<()> {
    let config = &settings.extract;
    let pipeline = Pipeline::new(config)?;
    log::debug!(
        "{} selectors: {}",
        pipeline.selectors().len(),
        pipeline
            .selectors()
            .iter()
            .map(|s| format!("{} ({})", s, s.kind()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut log_sink = LogSink::default();
    let mut discard = Discard;
    let sink: &mut dyn DiagnosticSink = if config.debug {
        &mut log_sink
    } else {
        &mut discard
    };

    for source in sources {
        let reader = source.open()?;
        let summary = pipeline
            .run(reader, writer, sink)
            .with_context(|| format!("Failed to process {}", source.name()))?;

        log::debug!(
            "{}: {} lines read, {} written, {} skipped, {} columns",
            source.name(),
            summary.lines_read,
            summary.lines_written,
            summary.lines_skipped,
            summary.columns
        );

        if summary.outcome == Outcome::HeaderPrinted {
            break;
        }
    }

    if config.debug {
        log::debug!("{} diagnostics reported", log_sink.reported());
    }
    Ok(())
}
