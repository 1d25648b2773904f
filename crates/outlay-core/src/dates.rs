//! Date normalization and formatting
//!
//! Every date in the system is canonically `YYYY-MM-DD`. Input can arrive in
//! ISO, US (`MM/DD/YYYY`), or European (`DD.MM.YYYY`) form; everything else
//! goes through a fixed fallback list of unambiguous formats. Parsing always
//! builds the date from explicit year/month/day components so a date-only
//! string can never shift across a timezone boundary.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{Error, Result};

/// Fallback date substituted when parsing fails, so sorting and range
/// filtering stay total. Sorts before any real expense date.
pub const SENTINEL_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};

/// Abbreviated en-US month names, 1-indexed via `month_abbrev`.
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full en-US month names for comparison report labels.
const MONTH_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn iso_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap())
}

fn us_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap())
}

fn european_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").unwrap())
}

/// Unambiguous formats tried when none of the three regexes match.
/// Two-digit years are deliberately absent; they are rejected everywhere.
const FALLBACK_FORMATS: [&str; 4] = ["%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Parse a date string in any supported format into a calendar date.
///
/// Formats are tried in priority order: ISO, US, European, then the
/// fallback list. Dates that match a regex shape but name an impossible
/// day (e.g. `02/30/2023`) are rejected rather than rolled over.
pub fn parse(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::InvalidDate("empty date string".into()));
    }

    if let Some(caps) = iso_re().captures(input) {
        return from_components(&caps[1], &caps[2], &caps[3], input);
    }

    if let Some(caps) = us_re().captures(input) {
        // Month first, then day
        return from_components(&caps[3], &caps[1], &caps[2], input);
    }

    if let Some(caps) = european_re().captures(input) {
        // Day first, then month
        return from_components(&caps[3], &caps[2], &caps[1], input);
    }

    for format in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date);
        }
    }

    Err(Error::InvalidDate(input.to_string()))
}

/// Build a date from textual year/month/day components.
fn from_components(year: &str, month: &str, day: &str, original: &str) -> Result<NaiveDate> {
    let year: i32 = year
        .parse()
        .map_err(|_| Error::InvalidDate(original.to_string()))?;
    let month: u32 = month
        .parse()
        .map_err(|_| Error::InvalidDate(original.to_string()))?;
    let day: u32 = day
        .parse()
        .map_err(|_| Error::InvalidDate(original.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| Error::InvalidDate(original.to_string()))
}

/// Normalize a date string to canonical `YYYY-MM-DD`, or signal failure.
pub fn try_normalize(input: &str) -> Result<String> {
    parse(input).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Normalize a date string to canonical `YYYY-MM-DD`.
///
/// Total: when every parsing strategy fails the raw input is echoed back
/// unchanged, matching how callers display unparseable dates as-is.
pub fn normalize(input: &str) -> String {
    match try_normalize(input) {
        Ok(canonical) => canonical,
        Err(_) => {
            tracing::debug!(input, "failed to normalize date");
            input.to_string()
        }
    }
}

/// Parse a date string, substituting the sentinel when parsing fails.
pub fn parse_or_sentinel(input: &str) -> NaiveDate {
    parse(input).unwrap_or(SENTINEL_DATE)
}

/// Abbreviated en-US month name for a 1-indexed month. Out-of-range
/// input wraps instead of panicking.
pub fn month_abbrev(month: u32) -> &'static str {
    MONTH_ABBREV[(month.saturating_sub(1) % 12) as usize]
}

/// Full en-US month name for a 1-indexed month. Same wrapping as
/// `month_abbrev`.
pub fn month_name(month: u32) -> &'static str {
    MONTH_FULL[(month.saturating_sub(1) % 12) as usize]
}

/// Render a date for display: `"Mar 15, 2023"`.
///
/// Output is pinned to the en-US convention regardless of system locale.
pub fn format_display(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_abbrev(date.month()),
        date.day(),
        date.year()
    )
}

/// Render a date for an editable input field: `MM/DD/YYYY`, zero-padded.
///
/// Distinct from display formatting; this is the shape the US-format
/// parser accepts back.
pub fn format_input(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_iso() {
        let date = parse("2023-03-15").unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn parse_us_format() {
        let date = parse("3/5/2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 5).unwrap());
        // Zero-padded variant parses to the same date
        assert_eq!(parse("03/05/2023").unwrap(), date);
    }

    #[test]
    fn parse_european_format() {
        let date = parse("5.3.2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 5).unwrap());
        assert_eq!(parse("05.03.2023").unwrap(), date);
    }

    #[test]
    fn all_formats_agree_on_canonical_form() {
        for input in ["2023-03-15", "03/15/2023", "3/15/2023", "15.03.2023"] {
            assert_eq!(normalize(input), "2023-03-15", "input: {}", input);
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["2023-03-15", "03/15/2023", "15.03.2023", "not a date"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalize_echoes_unparseable_input() {
        assert_eq!(normalize("garbage"), "garbage");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn fallback_formats() {
        assert_eq!(normalize("2023/03/15"), "2023-03-15");
        assert_eq!(normalize("March 15, 2023"), "2023-03-15");
        assert_eq!(normalize("Mar 15, 2023"), "2023-03-15");
    }

    #[test]
    fn two_digit_years_rejected() {
        assert!(parse("03/15/23").is_err());
        assert!(parse("15.03.23").is_err());
    }

    #[test]
    fn invalid_day_of_month_rejected() {
        // Feb 30 is rejected, never rolled to March
        assert!(parse("02/30/2023").is_err());
        assert!(parse("2023-02-30").is_err());
        // Day 31 in a 30-day month
        assert!(parse("31.04.2023").is_err());
        // But real month-end dates are fine
        assert!(parse("2024-02-29").is_ok());
    }

    #[test]
    fn sentinel_for_unparseable() {
        assert_eq!(parse_or_sentinel("garbage"), SENTINEL_DATE);
        assert_eq!(parse_or_sentinel(""), SENTINEL_DATE);
        assert_eq!(
            parse_or_sentinel("2023-03-15"),
            NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()
        );
    }

    #[test]
    fn sentinel_sorts_before_real_dates() {
        assert!(SENTINEL_DATE < parse("2022-01-01").unwrap());
    }

    #[test]
    fn month_names_are_total() {
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(12), "Dec");
        assert_eq!(month_name(9), "September");
        // Out-of-range months wrap rather than panic
        assert_eq!(month_abbrev(0), "Jan");
        assert_eq!(month_abbrev(13), "Jan");
        assert_eq!(month_name(0), "January");
    }

    #[test]
    fn display_format_pinned() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
        assert_eq!(format_display(date), "Mar 5, 2023");
    }

    #[test]
    fn input_format_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
        assert_eq!(format_input(date), "03/05/2023");
    }

    #[test]
    fn input_format_round_trips() {
        for input in ["2023-03-15", "03/15/2023", "15.03.2023"] {
            let parsed = parse(input).unwrap();
            assert_eq!(parse(&format_input(parsed)).unwrap(), parsed);
        }
    }
}
