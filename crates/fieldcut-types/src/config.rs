use crate::{DuplicatePolicy, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Case rule for name and pattern selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderCase {
    #[default]
    Sensitive,
    Ignore,
    /// Insensitive unless the selector contains an uppercase character
    Smart,
}

impl HeaderCase {
    /// Ignore takes precedence over smart when both flags are set
    pub fn from_flags(ignore: bool, smart: bool) -> Self {
        if ignore {
            HeaderCase::Ignore
        } else if smart {
            HeaderCase::Smart
        } else {
            HeaderCase::Sensitive
        }
    }
}

impl fmt::Display for HeaderCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderCase::Sensitive => write!(f, "sensitive"),
            HeaderCase::Ignore => write!(f, "ignore"),
            HeaderCase::Smart => write!(f, "smart"),
        }
    }
}

/// Immutable settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Raw `-f` values, split later by the selector parser
    pub fields: Vec<String>,
    /// Input field delimiter
    pub separator: char,
    pub out_separator: String,
    /// Splits each raw `-f` value into selector tokens
    pub list_separator: char,
    pub ignore: bool,
    pub header_case: HeaderCase,
    pub fast: bool,
    pub header_print: bool,
    pub header_keep: bool,
    pub no_header: bool,
    pub duplicates: DuplicatePolicy,
    pub downcase: bool,
    pub debug: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            separator: ',',
            out_separator: "\t".to_string(),
            list_separator: ',',
            ignore: false,
            header_case: HeaderCase::Sensitive,
            fast: false,
            header_print: false,
            header_keep: true,
            no_header: false,
            duplicates: DuplicatePolicy::Last,
            downcase: false,
            debug: false,
        }
    }
}

impl ExtractConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.separator.is_ascii() {
            return Err(Error::InvalidConfig(format!(
                "separator must be a single ASCII character, got {:?}",
                self.separator
            )));
        }
        if self.separator == '\n' || self.separator == '\r' {
            return Err(Error::InvalidConfig(
                "separator cannot be a line terminator".to_string(),
            ));
        }
        if self.separator == '"' {
            return Err(Error::InvalidConfig(
                "separator cannot be the CSV quote character".to_string(),
            ));
        }
        Ok(())
    }

    /// Input delimiter as the single byte the CSV reader expects
    pub fn delimiter(&self) -> u8 {
        let mut buf = [0u8; 4];
        self.separator.encode_utf8(&mut buf);
        buf[0]
    }
}
