use fieldcut_types::{CaseMode, Error, HeaderCase, Result, Selector};
use regex::RegexBuilder;
use std::collections::HashSet;

/// Options the selector parser needs from the run configuration
#[derive(Debug, Clone, Copy)]
pub struct SelectorOptions {
    pub list_separator: char,
    pub header_case: HeaderCase,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            list_separator: ',',
            header_case: HeaderCase::Sensitive,
        }
    }
}

/// Split raw `-f` values into distinct tokens, in first-seen order.
///
/// Pieces are trimmed and empty pieces dropped.
pub fn split_tokens(values: &[String], list_separator: char) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for value in values {
        for piece in value.split(list_separator) {
            let piece = piece.trim();
            if piece.is_empty() || !seen.insert(piece) {
                continue;
            }
            tokens.push(piece.to_string());
        }
    }

    tokens
}

/// Parse raw `-f` values into typed selectors.
///
/// Fails only when a `/.../` selector holds an invalid regex.
pub fn parse_selectors(values: &[String], options: SelectorOptions) -> Result<Vec<Selector>> {
    split_tokens(values, options.list_separator)
        .into_iter()
        .map(|token| classify(token, options.header_case))
        .collect()
}

/// Whole-token base-10 integer, optionally signed
pub fn parse_index(token: &str) -> Option<i64> {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match token.parse::<i64>() {
        Ok(n) => Some(n),
        // Too many digits to fit: still a position, just an unreachable one
        Err(_) if token.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// `N-M` or `N-` with unsigned bounds. A leading `-` is never a range: `-2`
/// is a negative index.
pub fn parse_range(token: &str) -> Option<(i64, Option<i64>)> {
    let (start, end) = token.split_once('-')?;
    let bound = |s: &str| -> Option<i64> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(s.parse::<i64>().unwrap_or(i64::MAX))
        } else {
            None
        }
    };

    let start = bound(start)?;
    let end = if end.is_empty() { None } else { Some(bound(end)?) };
    Some((start, end))
}

fn classify(token: String, header_case: HeaderCase) -> Result<Selector> {
    if let Some(position) = parse_index(&token) {
        return Ok(Selector::Index {
            raw: token,
            position,
        });
    }

    if let Some((start, end)) = parse_range(&token) {
        return Ok(Selector::Range {
            raw: token,
            start,
            end,
        });
    }

    if let Some(pattern) = pattern_body(&token) {
        let case = case_mode(header_case, pattern);
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case.is_insensitive())
            .build()
            .map_err(|source| Error::InvalidPattern {
                selector: token.clone(),
                source,
            })?;
        return Ok(Selector::Pattern { raw: token, regex });
    }

    let case = case_mode(header_case, &token);
    Ok(Selector::Name { raw: token, case })
}

fn pattern_body(token: &str) -> Option<&str> {
    if token.len() < 2 {
        return None;
    }
    token.strip_prefix('/')?.strip_suffix('/')
}

fn case_mode(header_case: HeaderCase, text: &str) -> CaseMode {
    match header_case {
        HeaderCase::Sensitive => CaseMode::Sensitive,
        HeaderCase::Ignore => CaseMode::Insensitive,
        HeaderCase::Smart if text.chars().any(char::is_uppercase) => CaseMode::Sensitive,
        HeaderCase::Smart => CaseMode::Insensitive,
    }
}
