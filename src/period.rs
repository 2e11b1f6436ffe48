//! Parsing and formatting for human-readable date ranges like
//! `"Apr 2022 - Aug 2024"` or `"Nov 2025 - Present"`.
//!
//! Durations use inclusive month counting: a role held only within a single
//! calendar month counts as 1 month, not 0. This matches how professional
//! networks display tenure, and existing config data depends on it.

use chrono::{Datelike, Local};
use thiserror::Error;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Couldn't parse period {0:?}")]
    ParseFailure(String),
}

/// A calendar month. `month` is zero-based (Jan = 0, Dec = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The current wall-clock month. Re-evaluated on every call, so an open
    /// range can tick over at a month boundary between two renders.
    pub fn now() -> Self {
        let today = Local::now();
        Self {
            year: today.year(),
            month: today.month0(),
        }
    }
}

/// One side of a parsed date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodInstant {
    Month(YearMonth),
    Present,
}

impl PeriodInstant {
    pub fn resolve(self, now: YearMonth) -> YearMonth {
        match self {
            Self::Month(ym) => ym,
            Self::Present => now,
        }
    }
}

/// Parses a `"Mon YYYY - Mon YYYY"` range. `"Present"` is accepted on the
/// right side only. Requires exactly one `" - "` separator.
pub fn parse_period(period: &str) -> Result<(PeriodInstant, PeriodInstant), PeriodError> {
    let fail = || PeriodError::ParseFailure(period.to_string());

    let (start, end) = period.split_once(" - ").ok_or_else(fail)?;
    if end.contains(" - ") {
        return Err(fail());
    }

    let start = parse_month_year(start.trim()).ok_or_else(fail)?;
    let end = end.trim();
    let end = if end == "Present" {
        PeriodInstant::Present
    } else {
        parse_month_year(end).ok_or_else(fail)?
    };

    Ok((start, end))
}

fn parse_month_year(token: &str) -> Option<PeriodInstant> {
    let (month, year) = token.split_once(' ')?;
    let month = MONTHS.iter().position(|m| *m == month)? as u32;
    let year = year.parse::<i32>().ok()?;
    Some(PeriodInstant::Month(YearMonth::new(year, month)))
}

/// Inclusive month count between two calendar months, clamped to at least 1
/// so reversed or same-month ranges never yield a non-positive duration.
pub fn months_between(start: YearMonth, end: YearMonth) -> u32 {
    let total = (end.year - start.year) * 12 + (end.month as i32 - start.month as i32) + 1;
    total.max(1) as u32
}

/// Formats a month count as `"3 mos"`, `"1 yr"`, `"2 yrs 5 mos"`, etc.
pub fn format_months(total: u32) -> String {
    let years = total / 12;
    let months = total % 12;
    if years == 0 {
        pluralize(months, "mo")
    } else if months == 0 {
        pluralize(years, "yr")
    } else {
        format!("{} {}", pluralize(years, "yr"), pluralize(months, "mo"))
    }
}

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Duration label for a period string, resolving `"Present"` against `now`.
/// Malformed periods degrade to an empty label rather than failing a render.
pub fn duration_label_at(period: &str, now: YearMonth) -> String {
    match parse_period(period) {
        Ok((start, end)) => format_months(months_between(start.resolve(now), end.resolve(now))),
        Err(_) => String::new(),
    }
}

/// Duration label resolved against the current wall clock.
pub fn duration_label(period: &str) -> String {
    duration_label_at(period, YearMonth::now())
}
