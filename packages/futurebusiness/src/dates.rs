//! Date parsing for the English date labels used on the Future Business pages.
//!
//! Period headings carry full dates ("Thursday 17 November 2011"). Day labels
//! and bill adjournment markers omit the year, which is taken from the end of
//! the enclosing period and corrected when the business falls in the December
//! before a period ending in the new year.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Month, NaiveDate, Weekday};
use regex::Regex;
use thiserror::Error;

use crate::text::normalize;

/// Grammar of an English date: optional weekday, day, month name, year.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<weekday>[A-Za-z]+) )?(?P<day>\d{1,2}) (?P<month>[A-Za-z]+) (?P<year>\d{4})$",
    )
    .expect("valid regex")
});

/// Error raised when date text does not follow the expected grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// Text does not have the shape of the requested pattern.
    #[error("date '{text}' does not match '{expected}'")]
    Grammar { text: String, expected: &'static str },

    /// Weekday word is not an English weekday name.
    #[error("unknown weekday '{weekday}' in date '{text}'")]
    Weekday { text: String, weekday: String },

    /// Month word is not an English month name.
    #[error("unknown month '{month}' in date '{text}'")]
    Month { text: String, month: String },

    /// Day, month and year do not form a calendar date.
    #[error("date '{text}' does not exist")]
    Calendar { text: String },
}

/// Shapes of full date text accepted by [`parse_full_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// "Thursday 17 November 2011".
    WeekdayDayMonthYear,
    /// "12 November 2011".
    DayMonthYear,
}

impl DatePattern {
    /// Human-readable form of the pattern, used in error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeekdayDayMonthYear => "Weekday DD Month YYYY",
            Self::DayMonthYear => "DD Month YYYY",
        }
    }
}

/// Which year-boundary correction applies to a year-less date.
///
/// A December date is moved back one year when the period ends in a month
/// other than the rule's anchor month. Day listings anchor on December,
/// bill adjournments on January; both are kept as observed on real pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearBoundary {
    /// Date label of a sitting day.
    DayListing,
    /// Date a bill's debate was adjourned on.
    BillAdjournment,
}

impl YearBoundary {
    fn anchor_month(self) -> u32 {
        match self {
            Self::DayListing => 12,
            Self::BillAdjournment => 1,
        }
    }

    /// Whether `resolved` belongs to the calendar year before `ending`.
    #[must_use]
    pub fn applies(self, resolved: NaiveDate, ending: NaiveDate) -> bool {
        resolved.month() == 12 && ending.month() != self.anchor_month()
    }
}

/// Parse full date text into a calendar date.
///
/// The weekday name is checked against the English weekday names but not
/// against the resulting date, so a label printed for the wrong year still
/// parses.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use futurebusiness::dates::{parse_full_date, DatePattern};
///
/// let date =
///     parse_full_date("Thursday 17 November 2011", DatePattern::WeekdayDayMonthYear).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2011, 11, 17).unwrap());
/// assert!(parse_full_date("17 November 2011", DatePattern::WeekdayDayMonthYear).is_err());
/// ```
pub fn parse_full_date(text: &str, pattern: DatePattern) -> Result<NaiveDate, DateParseError> {
    parse_date_parts(text, pattern).map(|(_, date)| date)
}

/// Resolve a year-less date against the end of its period.
///
/// `text` is e.g. "Thursday 1 December" or "12 November"; the year of
/// `ending` is appended and the [`YearBoundary`] correction applied.
pub fn resolve_partial_date(
    text: &str,
    pattern: DatePattern,
    ending: NaiveDate,
    boundary: YearBoundary,
) -> Result<NaiveDate, DateParseError> {
    let full = format!("{} {}", normalize(text), ending.year());
    let (weekday, date) = parse_date_parts(&full, pattern)?;

    let date = if boundary.applies(date, ending) {
        date.with_year(date.year() - 1)
            .ok_or_else(|| DateParseError::Calendar { text: full.clone() })?
    } else {
        date
    };

    if let Some(weekday) = weekday {
        if weekday != date.weekday() {
            tracing::warn!(
                label = %text,
                resolved = %date,
                "Weekday in date label does not match the resolved date"
            );
        }
    }

    Ok(date)
}

/// Resolve the date label of a sitting day ("Thursday 1 December").
pub fn resolve_day_date(label: &str, ending: NaiveDate) -> Result<NaiveDate, DateParseError> {
    resolve_partial_date(
        label,
        DatePattern::WeekdayDayMonthYear,
        ending,
        YearBoundary::DayListing,
    )
}

/// Resolve the date of an adjourned bill debate ("12 November").
pub fn resolve_adjourned_date(text: &str, ending: NaiveDate) -> Result<NaiveDate, DateParseError> {
    resolve_partial_date(
        text,
        DatePattern::DayMonthYear,
        ending,
        YearBoundary::BillAdjournment,
    )
}

fn parse_date_parts(
    text: &str,
    pattern: DatePattern,
) -> Result<(Option<Weekday>, NaiveDate), DateParseError> {
    let text = normalize(text);
    let grammar = || DateParseError::Grammar {
        text: text.clone(),
        expected: pattern.as_str(),
    };

    let caps = DATE_PATTERN.captures(&text).ok_or_else(grammar)?;
    let weekday_word = caps.name("weekday").map(|m| m.as_str());
    let weekday = match (pattern, weekday_word) {
        (DatePattern::WeekdayDayMonthYear, Some(word)) => {
            Some(Weekday::from_str(word).map_err(|_| DateParseError::Weekday {
                text: text.clone(),
                weekday: word.to_string(),
            })?)
        }
        (DatePattern::DayMonthYear, None) => None,
        _ => return Err(grammar()),
    };

    // All three groups are mandatory in the pattern; day and year are digits-only
    let (Some(day), Some(month), Some(year)) =
        (caps.name("day"), caps.name("month"), caps.name("year"))
    else {
        return Err(grammar());
    };
    let day: u32 = day.as_str().parse().map_err(|_| grammar())?;
    let year: i32 = year.as_str().parse().map_err(|_| grammar())?;
    let month = Month::from_str(month.as_str()).map_err(|_| DateParseError::Month {
        text: text.clone(),
        month: month.as_str().to_string(),
    })?;

    let date = NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
        .ok_or_else(|| DateParseError::Calendar { text: text.clone() })?;

    Ok((weekday, date))
}
