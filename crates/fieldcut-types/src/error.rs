use std::fmt;

/// Result type for fieldcut-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A `/.../` selector whose interior is not a valid regex
    InvalidPattern {
        selector: String,
        source: regex::Error,
    },

    /// Configuration values that cannot drive an extraction
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPattern { selector, .. } => {
                write!(f, "Invalid pattern in selector {}", selector)
            }
            Error::InvalidConfig(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidPattern { source, .. } => Some(source),
            Error::InvalidConfig(_) => None,
        }
    }
}
