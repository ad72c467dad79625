use crate::types::{Duplicates, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fieldcut")]
#[command(
    about = "Extract columns from CSV or delimited text and print them tab separated",
    long_about = None
)]
#[command(version)]
#[command(after_help = "Examples:
  fieldcut -f revenues < data.csv            column by header name
  fieldcut -f 1 < data.csv                   column by 1-based index
  fieldcut -f date -f revenues < data.csv    several columns, in that order
  fieldcut -f 2-4,/revenue(s)?/ < data.csv   range and regex
  fieldcut -H -f date < data.csv             print the resolved header and exit")]
pub struct Cli {
    /// Columns to extract: header name, 1-based index, range (2-4, 3-) or /regex/.
    /// Repeatable and comma separated. Default: every column
    #[arg(short = 'f', long = "field", value_name = "LIST")]
    pub fields: Vec<String>,

    /// Input field delimiter (single character, `\t` or `tab` accepted) [default: ,]
    #[arg(short, long, value_name = "CHAR", value_parser = parse_separator)]
    pub separator: Option<char>,

    /// Output field delimiter (`\t` escape accepted) [default: tab]
    #[arg(short, long, value_name = "STR", value_parser = parse_out_separator)]
    pub out_separator: Option<String>,

    /// Delimiter between selectors inside one --field value [default: ,]
    #[arg(long, value_name = "CHAR", value_parser = parse_separator)]
    pub list_separator: Option<char>,

    /// Skip lines that fail to parse instead of aborting
    #[arg(short, long, overrides_with = "no_ignore")]
    pub ignore: bool,

    /// Abort on lines that fail to parse, even if the config file sets `ignore`
    #[arg(long, overrides_with = "ignore")]
    pub no_ignore: bool,

    /// Match header names and patterns case-insensitively
    #[arg(short = 'c', long, overrides_with = "no_header_case_ignore")]
    pub header_case_ignore: bool,

    /// Match case exactly, even if the config file sets `header_case_ignore`
    #[arg(long, overrides_with = "header_case_ignore")]
    pub no_header_case_ignore: bool,

    /// Case-insensitive unless the selector has an uppercase letter
    #[arg(long, overrides_with = "no_header_case_smart")]
    pub header_case_smart: bool,

    /// Turn off smart case set in the config file
    #[arg(long, overrides_with = "header_case_smart")]
    pub no_header_case_smart: bool,

    /// Split on the separator without CSV quoting (comma separator only)
    #[arg(long, overrides_with = "no_fast")]
    pub fast: bool,

    /// Parse quoted CSV, even if the config file sets `fast`
    #[arg(long, overrides_with = "fast")]
    pub no_fast: bool,

    /// Print the resolved header with output positions, then exit
    #[arg(short = 'H', long)]
    pub header_print: bool,

    /// Do not echo the selected header as the first output line
    #[arg(short = 'K', long, overrides_with = "header_keep")]
    pub no_header_keep: bool,

    /// Echo the selected header, even if the config file sets `header_keep = false`
    #[arg(long, overrides_with = "no_header_keep")]
    pub header_keep: bool,

    /// Input has no header row; columns are named 1..N
    #[arg(short = 'n', long, overrides_with = "header")]
    pub no_header: bool,

    /// Input has a header row, even if the config file sets `no_header`
    #[arg(long, overrides_with = "no_header")]
    pub header: bool,

    /// Which column a repeated header name refers to [default: last]
    #[arg(long, value_name = "POLICY")]
    pub duplicates: Option<Duplicates>,

    /// Lowercase every output cell
    #[arg(short, long, overrides_with = "no_downcase")]
    pub downcase: bool,

    /// Keep cell case, even if the config file sets `downcase`
    #[arg(long, overrides_with = "downcase")]
    pub no_downcase: bool,

    /// Report selector and row-width diagnostics on stderr
    #[arg(long, overrides_with = "no_debug")]
    pub debug: bool,

    /// Turn off debug mode set in the config file
    #[arg(long, overrides_with = "debug")]
    pub no_debug: bool,

    /// Log verbosity when --debug is not set [default: warn]
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Config file [default: $FIELDCUT_CONFIG or <config dir>/fieldcut/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input files, read in order. Reads stdin when empty or `-`
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Expand the escapes people type for invisible delimiters
pub fn unescape(raw: &str) -> String {
    match raw {
        "tab" | "\\t" => "\t".to_string(),
        "space" => " ".to_string(),
        _ => raw.replace("\\t", "\t"),
    }
}

pub fn parse_separator(raw: &str) -> Result<char, String> {
    let value = unescape(raw);
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got {:?}", raw)),
    }
}

pub fn parse_out_separator(raw: &str) -> Result<String, String> {
    Ok(unescape(raw))
}
