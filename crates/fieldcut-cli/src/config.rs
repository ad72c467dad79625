use crate::args::{Cli, parse_separator, unescape};
use crate::types::LogLevel;
use anyhow::{Context, Result};
use fieldcut_types::{DuplicatePolicy, ExtractConfig, HeaderCase};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults read from `config.toml`. Every key is optional; command-line flags
/// take precedence over whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub fields: Option<Vec<String>>,
    pub separator: Option<String>,
    pub out_separator: Option<String>,
    pub list_separator: Option<String>,
    pub ignore: Option<bool>,
    pub header_case_ignore: Option<bool>,
    pub header_case_smart: Option<bool>,
    pub fast: Option<bool>,
    pub header_keep: Option<bool>,
    pub no_header: Option<bool>,
    pub duplicates: Option<DuplicatePolicy>,
    pub downcase: Option<bool>,
    pub debug: Option<bool>,
    pub log_level: Option<LogLevel>,
}

impl FileConfig {
    /// Load the config file, falling back to defaults when the default
    /// location has no file. An explicitly requested file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Self::load_from(path);
        }

        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FileConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }
}

/// Config file location by priority:
/// 1. FIELDCUT_CONFIG environment variable (used even if the file is missing)
/// 2. System config directory (`<config dir>/fieldcut/config.toml`)
/// 3. ~/.fieldcut/config.toml
///
/// The last two are only taken when the file exists.
fn default_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("FIELDCUT_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    first_existing([
        dirs::config_dir().map(|dir| dir.join("fieldcut").join("config.toml")),
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".fieldcut").join("config.toml")),
    ])
}

fn first_existing(candidates: impl IntoIterator<Item = Option<PathBuf>>) -> Option<PathBuf> {
    candidates.into_iter().flatten().find(|path| path.exists())
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Everything a run needs, resolved from flags over file over defaults
#[derive(Debug, Clone)]
pub struct Settings {
    pub extract: ExtractConfig,
    pub log_level: LogLevel,
}

impl Settings {
    pub fn build(cli: &Cli, file: &FileConfig) -> Result<Self> {
        let defaults = ExtractConfig::default();

        let separator = match (cli.separator, &file.separator) {
            (Some(c), _) => c,
            (None, Some(raw)) => parse_separator(raw)
                .map_err(|e| anyhow::anyhow!("Invalid separator in config file: {}", e))?,
            (None, None) => defaults.separator,
        };
        let list_separator = match (cli.list_separator, &file.list_separator) {
            (Some(c), _) => c,
            (None, Some(raw)) => parse_separator(raw)
                .map_err(|e| anyhow::anyhow!("Invalid list_separator in config file: {}", e))?,
            (None, None) => defaults.list_separator,
        };
        let out_separator = cli
            .out_separator
            .clone()
            .or_else(|| file.out_separator.as_deref().map(unescape))
            .unwrap_or(defaults.out_separator);

        let header_case = HeaderCase::from_flags(
            switch(cli.header_case_ignore, cli.no_header_case_ignore, file.header_case_ignore, false),
            switch(cli.header_case_smart, cli.no_header_case_smart, file.header_case_smart, false),
        );
        let header_keep = switch(
            cli.header_keep,
            cli.no_header_keep,
            file.header_keep,
            defaults.header_keep,
        );
        let debug = switch(cli.debug, cli.no_debug, file.debug, defaults.debug);

        let fields = if cli.fields.is_empty() {
            file.fields.clone().unwrap_or_default()
        } else {
            cli.fields.clone()
        };

        let extract = ExtractConfig {
            fields,
            separator,
            out_separator,
            list_separator,
            ignore: switch(cli.ignore, cli.no_ignore, file.ignore, defaults.ignore),
            header_case,
            fast: switch(cli.fast, cli.no_fast, file.fast, defaults.fast),
            header_print: cli.header_print,
            header_keep,
            no_header: switch(cli.no_header, cli.header, file.no_header, defaults.no_header),
            duplicates: cli
                .duplicates
                .map(DuplicatePolicy::from)
                .or(file.duplicates)
                .unwrap_or(defaults.duplicates),
            downcase: switch(cli.downcase, cli.no_downcase, file.downcase, defaults.downcase),
            debug,
        };
        extract.validate()?;

        let log_level = if debug {
            LogLevel::Debug
        } else {
            cli.log_level.or(file.log_level).unwrap_or(LogLevel::Warn)
        };

        Ok(Self { extract, log_level })
    }
}

/// A `--x` / `--no-x` flag pair over the file value over the default
fn switch(on: bool, off: bool, from_file: Option<bool>, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        from_file.unwrap_or(default)
    }
}
