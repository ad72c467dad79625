use crate::row_source::RowError;
use std::error::Error as _;
use std::fmt;

/// Result type for fieldcut-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Selector or configuration error from the types layer
    Types(fieldcut_types::Error),

    /// Reading input or writing output failed
    Io(std::io::Error),

    /// A line could not be split into cells and `ignore` was off
    Row { line: usize, source: RowError },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(_) => write!(f, "IO error"),
            Error::Row { line, .. } => write!(f, "Line {}", line),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            // Transparent: the wrapped error already printed itself
            Error::Types(err) => err.source(),
            Error::Io(err) => Some(err),
            Error::Row { source, .. } => Some(source),
        }
    }
}

impl From<fieldcut_types::Error> for Error {
    fn from(err: fieldcut_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
