use fieldcut_engine::{Diagnostic, DiagnosticSink, Severity};
use std::io::Write;

/// Install the stderr logger. Records print as the bare message so
/// diagnostics keep their documented shape.
pub fn init(level: log::LevelFilter) {
    // A second init (tests calling run twice) keeps the first logger
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}

/// Forwards engine diagnostics to the `log` facade
#[derive(Debug, Default)]
pub struct LogSink {
    reported: usize,
}

impl LogSink {
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        match diagnostic.severity() {
            Severity::Warning => log::warn!("{}", diagnostic),
            Severity::Debug => log::debug!("{}", diagnostic),
        }
    }
}
