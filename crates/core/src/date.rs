//! Expansion of abbreviated post timestamps.
//!
//! Turns `3:00 PM · Jan 2, 2024` into `3:00 PM · January 2nd, 2024`, the
//! form the wiki's prose uses, and turns prose dates back into ISO dates.

use crate::config::CitationConfig;
use crate::error::{Error, Result};
use chrono::{Month, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for prose dates such as `January 2nd, 2024`.
static MDY_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ *([A-Z][a-z]+) +([0-9]{1,2})(?:[stndrdth]{2})?, (20[0-9]+) *$").unwrap()
});

/// Index of the month token in a timestamp.
const MONTH_TOKEN: usize = 3;

/// Index of the day-of-month token in a timestamp.
const DAY_TOKEN: usize = 4;

/// Minimum number of space-separated tokens in a timestamp.
const MIN_TOKENS: usize = 6;

/// English ordinal suffix for a day of month.
pub fn english_ordinal_suffix(n: u32) -> &'static str {
    if matches!(n, 11 | 12 | 13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Convert a prose date such as `January 2nd, 2024` to `2024-01-02`.
///
/// This is the reverse of [`DateExpander::expand`], for dates as they appear
/// in chapter articles. Those articles also contain the misspelling
/// `Feburary` and the abbreviation `Mar`, which are accepted.
pub fn mdy_to_iso(date: &str) -> Result<String> {
    let malformed = || Error::MalformedDate(date.to_string());

    let caps = MDY_DATE_REGEX.captures(date).ok_or_else(malformed)?;
    let month = parse_month_name(&caps[1]).ok_or_else(|| Error::UnknownMonth(caps[1].to_string()))?;
    let day: u32 = caps[2].parse().map_err(|_| malformed())?;
    let year: i32 = caps[3].parse().map_err(|_| malformed())?;

    let date = NaiveDate::from_ymd_opt(year, month.number_from_month(), day).ok_or_else(malformed)?;
    Ok(date.format("%Y-%m-%d").to_string())
}

fn parse_month_name(name: &str) -> Option<Month> {
    match name {
        "Feburary" => Some(Month::February),
        _ => name.parse().ok(),
    }
}

/// Expands abbreviated month and day in timestamps.
#[derive(Debug, Clone)]
pub struct DateExpander {
    config: CitationConfig,
}

impl Default for DateExpander {
    fn default() -> Self {
        Self::from_config(CitationConfig::default())
    }
}

impl DateExpander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: CitationConfig) -> Self {
        Self { config }
    }

    /// Expand a timestamp such as `3:00 PM · Jan 2, 2024`.
    ///
    /// Tokens other than the month and day are kept as they are.
    pub fn expand(&self, timestamp: &str) -> Result<String> {
        let mut parts: Vec<String> = timestamp.split(' ').map(str::to_string).collect();
        if parts.len() < MIN_TOKENS {
            return Err(Error::MalformedTimestamp(timestamp.to_string()));
        }

        let month = self
            .config
            .month_name(&parts[MONTH_TOKEN])
            .ok_or_else(|| Error::UnknownMonth(parts[MONTH_TOKEN].clone()))?
            .to_string();

        let day = parse_leading_digits(&parts[DAY_TOKEN])
            .ok_or_else(|| Error::MalformedTimestamp(timestamp.to_string()))?;

        parts[MONTH_TOKEN] = month;
        parts[DAY_TOKEN] = format!("{}{},", day, english_ordinal_suffix(day));

        let expanded = parts.join(" ");
        log::debug!("Expanded timestamp {:?} -> {:?}", timestamp, expanded);
        Ok(expanded)
    }
}

/// Parse the run of ASCII digits at the start of a token.
fn parse_leading_digits(token: &str) -> Option<u32> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}
