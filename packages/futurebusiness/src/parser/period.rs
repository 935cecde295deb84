//! Business period: the division heading, its note and its days.

use std::sync::LazyLock;

use regex::Regex;

use super::day::parse_days;
use super::markers::{DAY, DIVISION_HEADING, DIVISION_NOTE};
use super::require;
use crate::dates::{parse_full_date, DatePattern};
use crate::error::{FutureBusinessError, Result};
use crate::html::Node;
use crate::text::normalize;
use crate::types::Period;

/// Position of the heading text among the children of the division heading,
/// after the part letter and a line break.
const HEADING_TEXT_POSITION: usize = 2;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PERIOD_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"period ending on (?P<ending>.+)$").expect("valid regex"));

/// Parse the business period of a Future Business division.
pub fn parse_period(division: Node<'_>) -> Result<Period> {
    let heading = require(division, DIVISION_HEADING, "business table")?;
    let title = heading
        .child(HEADING_TEXT_POSITION)
        .map(|n| normalize(&n.text_content()))
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            FutureBusinessError::schema(
                format!("heading text at child {HEADING_TEXT_POSITION}"),
                DIVISION_HEADING.to_string(),
            )
        })?;

    let ending_text = PERIOD_ENDING
        .captures(&title)
        .and_then(|caps| caps.name("ending"))
        .ok_or_else(|| {
            FutureBusinessError::schema("'period ending on <date>'", format!("heading '{title}'"))
        })?
        .as_str();
    let ending = parse_full_date(ending_text, DatePattern::WeekdayDayMonthYear)?;

    let subtitle = normalize(&require(division, DIVISION_NOTE, "business table")?.text_content());

    let days = parse_days(division.find_all(DAY), ending)?;
    tracing::info!(%ending, days = days.len(), "Parsed business period");

    Ok(Period {
        title,
        subtitle,
        ending,
        days,
    })
}
