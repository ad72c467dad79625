use fieldcut_types::ExtractConfig;
use std::fmt;

/// Why a single input line could not be turned into cells
#[derive(Debug)]
pub enum RowError {
    InvalidUtf8(std::str::Utf8Error),
    /// Odd number of quote characters: a quoted field never closes
    UnterminatedQuote,
    /// An unquoted carriage return splits the line into several records
    StrayLineBreak,
    Csv(csv::Error),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::InvalidUtf8(_) => write!(f, "invalid UTF-8"),
            RowError::UnterminatedQuote => write!(f, "unterminated quoted field"),
            RowError::StrayLineBreak => write!(f, "unquoted line break inside record"),
            RowError::Csv(_) => write!(f, "malformed CSV"),
        }
    }
}

impl std::error::Error for RowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RowError::InvalidUtf8(err) => Some(err),
            RowError::Csv(err) => Some(err),
            RowError::UnterminatedQuote | RowError::StrayLineBreak => None,
        }
    }
}

/// Strip the line terminator and check the bytes are UTF-8
pub fn decode_line(raw: &[u8]) -> Result<&str, RowError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(RowError::InvalidUtf8)
}

/// Strategy for splitting one line into cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSource {
    /// One CSV record per line, quoting honored
    Strict { delimiter: u8 },
    /// Plain split on the delimiter, no quoting
    Fast { delimiter: char },
}

impl RowSource {
    /// Fast mode only applies to the default comma separator
    pub fn from_config(config: &ExtractConfig) -> Self {
        if config.fast {
            if config.separator == ',' {
                return RowSource::Fast { delimiter: ',' };
            }
            log::debug!(
                "fast mode requires the ',' separator, parsing {:?}-separated input as CSV",
                config.separator
            );
        }
        RowSource::Strict {
            delimiter: config.delimiter(),
        }
    }

    pub fn parse(&self, line: &str) -> Result<Vec<String>, RowError> {
        match *self {
            RowSource::Strict { delimiter } => parse_strict(line, delimiter),
            RowSource::Fast { delimiter } => Ok(line.split(delimiter).map(str::to_string).collect()),
        }
    }
}

fn parse_strict(line: &str, delimiter: u8) -> Result<Vec<String>, RowError> {
    // Escaped quotes come in pairs, so an odd count means an open field
    if line.bytes().filter(|&b| b == b'"').count() % 2 == 1 {
        return Err(RowError::UnterminatedQuote);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    if !reader.read_record(&mut record).map_err(RowError::Csv)? {
        return Ok(Vec::new());
    }

    let mut rest = csv::StringRecord::new();
    if reader.read_record(&mut rest).map_err(RowError::Csv)? {
        return Err(RowError::StrayLineBreak);
    }

    Ok(record.iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRICT: RowSource = RowSource::Strict { delimiter: b',' };
    const FAST: RowSource = RowSource::Fast { delimiter: ',' };

    #[test]
    fn test_strict_honors_quotes() {
        let cells = STRICT.parse(r#"1,"Smith, John","say ""hi""""#).unwrap();
        assert_eq!(cells, vec!["1", "Smith, John", r#"say "hi""#]);
    }

    #[test]
    fn test_fast_ignores_quotes() {
        let cells = FAST.parse(r#"1,"Smith, John""#).unwrap();
        assert_eq!(cells, vec!["1", "\"Smith", " John\""]);
    }

    #[test]
    fn test_strict_keeps_empty_cells() {
        let cells = STRICT.parse("a,,c,").unwrap();
        assert_eq!(cells, vec!["a", "", "c", ""]);
    }

    #[test]
    fn test_strict_rejects_unterminated_quote() {
        let err = STRICT.parse(r#"a,"b,c"#).unwrap_err();
        assert!(matches!(err, RowError::UnterminatedQuote));
    }

    #[test]
    fn test_strict_rejects_stray_carriage_return() {
        let err = STRICT.parse("a,b\rc,d").unwrap_err();
        assert!(matches!(err, RowError::StrayLineBreak));
    }

    #[test]
    fn test_strict_custom_delimiter() {
        let source = RowSource::Strict { delimiter: b';' };
        assert_eq!(source.parse("a;\"b;c\"").unwrap(), vec!["a", "b;c"]);
    }

    #[test]
    fn test_from_config_fast_needs_comma() {
        let config = ExtractConfig {
            fast: true,
            ..Default::default()
        };
        assert_eq!(RowSource::from_config(&config), FAST);

        let config = ExtractConfig {
            fast: true,
            separator: ';',
            ..Default::default()
        };
        assert_eq!(
            RowSource::from_config(&config),
            RowSource::Strict { delimiter: b';' }
        );
    }

    #[test]
    fn test_decode_line_strips_terminators() {
        assert_eq!(decode_line(b"a,b\r\n").unwrap(), "a,b");
        assert_eq!(decode_line(b"a,b\n").unwrap(), "a,b");
        assert_eq!(decode_line(b"a,b").unwrap(), "a,b");
        assert!(matches!(
            decode_line(b"a,\xff\n"),
            Err(RowError::InvalidUtf8(_))
        ));
    }
}
