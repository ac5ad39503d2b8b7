//! Parses the content of a birthdays file into structured `Entry` records.

use crate::entry::{Entry, PartialDate};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// A date sub-token made entirely of `?` or entirely of `x` marks the
/// component as unknown. Lowercase `x` only.
static SENTINEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\?+|x+)$").expect("valid regex"));

/// Per-entry parse failure.
///
/// Recovered into [`Entry::is_error`] at the line boundary; one bad line
/// never aborts its siblings and nothing here reaches the caller as a
/// fatal condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line has no space separating the date token from the name.
    InvalidLineFormat,
    /// The date token does not have exactly three dot-separated components.
    InvalidDateFormat,
    /// A present date component is not a non-negative integer.
    InvalidDateComponent,
    /// The components do not form a real calendar date (e.g. month 13).
    InvalidCalendarDate,
}

/// Parses the full content of a birthdays file.
///
/// Each line is parsed independently; lines that are blank or whose trimmed
/// content starts with `//` are skipped. Input order is preserved and a
/// malformed line becomes an erroneous entry rather than a failure.
///
/// # Arguments
///
/// * `content` - A string slice with the complete file content.
pub fn parse_content(content: &str) -> Vec<Entry> {
    content
        .lines()
        .filter(|line| !is_skippable(line))
        .map(parse_entry)
        .collect()
}

/// Parses one `<date> <name>` line, already known to be non-blank and
/// non-comment. Any failure is folded into the returned entry's error flag,
/// with the original line kept for display.
pub fn parse_entry(line: &str) -> Entry {
    try_parse_entry(line).unwrap_or_else(|_| Entry::erroneous(line))
}

/// Parses a `D.M.Y` date token into a [`PartialDate`].
///
/// Each component is either a run of digits or a sentinel (`?`/`x` runs)
/// meaning "unknown". Sentinel classification happens before numeric
/// parsing, so an unknown component and a malformed one stay distinct.
/// No range validation is done on the numbers themselves; values that do
/// not form a real calendar date are rejected at construction.
pub fn parse_date_token(token: &str) -> Result<PartialDate, ParseError> {
    let components: Vec<&str> = token.split('.').collect();
    if components.len() != 3 {
        return Err(ParseError::InvalidDateFormat);
    }

    // day, month, year
    let mut values: [u32; 3] = [1, 1, 1];
    let mut present = [false; 3];
    for (i, component) in components.iter().enumerate() {
        if SENTINEL.is_match(component) {
            continue;
        }
        values[i] = component
            .parse()
            .map_err(|_| ParseError::InvalidDateComponent)?;
        present[i] = true;
    }

    let year = i32::try_from(values[2]).map_err(|_| ParseError::InvalidCalendarDate)?;
    let resolved =
        NaiveDate::from_ymd_opt(year, values[1], values[0]).ok_or(ParseError::InvalidCalendarDate)?;

    Ok(PartialDate {
        raw: token.to_string(),
        resolved,
        has_day: present[0],
        has_month: present[1],
        has_year: present[2],
    })
}

fn try_parse_entry(line: &str) -> Result<Entry, ParseError> {
    let (token, name) = line.split_once(' ').ok_or(ParseError::InvalidLineFormat)?;
    let date = parse_date_token(token)?;
    Ok(Entry {
        raw: line.to_string(),
        name: name.to_string(),
        date,
        is_error: false,
    })
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("//")
}
