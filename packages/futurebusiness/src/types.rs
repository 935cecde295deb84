//! Core data types for House of Commons Future Business.
//!
//! The aggregate [`FutureBusiness`] owns the whole tree; every nested record
//! is built once by the parser and never shared or mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FutureBusinessError, Result};

/// Title given to every Future Business record.
pub const FUTURE_BUSINESS_TITLE: &str = "House of Commons Future Business";

/// House a bill originated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum House {
    /// House of Commons.
    #[default]
    Commons,

    /// House of Lords, shown on the page by a "[Lords]" qualifier.
    Lords,
}

impl House {
    /// Get the string value used in XML output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commons => "commons",
            Self::Lords => "lords",
        }
    }
}

/// A two-year session of Parliament, e.g. 2010-12.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Four-digit start year.
    pub start: String,

    /// Four-digit end year.
    pub end: String,
}

impl Session {
    /// Parse a session descriptor such as "2010-12" or "2010-2012".
    ///
    /// A two-digit end year is expanded with the century of the start year.
    ///
    /// # Examples
    /// ```
    /// use futurebusiness::types::Session;
    ///
    /// let session = Session::parse("2010-12").unwrap();
    /// assert_eq!(session.start, "2010");
    /// assert_eq!(session.end, "2012");
    /// ```
    pub fn parse(descriptor: &str) -> Result<Self> {
        let invalid = || {
            FutureBusinessError::schema(
                "session descriptor YYYY-YY or YYYY-YYYY",
                format!("'{descriptor}'"),
            )
        };

        let (start, end) = descriptor.trim().split_once('-').ok_or_else(invalid)?;
        let (start, end) = (start.trim(), end.trim());
        let is_year = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());

        if !is_year(start, 4) {
            return Err(invalid());
        }
        let end = if is_year(end, 2) {
            format!("{}{end}", &start[..2])
        } else if is_year(end, 4) {
            end.to_string()
        } else {
            return Err(invalid());
        };

        Ok(Self {
            start: start.to_string(),
            end,
        })
    }
}

/// A Private Member's Bill listed against an item of business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Bill name without the trailing "Bill".
    pub name: String,

    /// Stage of the bill, e.g. "Second reading".
    pub stage: String,

    /// Whether the bill was amended in the Public Bill Committee.
    pub committee_amended: bool,

    /// Originating house.
    pub house: House,

    /// Member in charge of the bill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,

    /// Date the debate was previously adjourned on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjourned: Option<NaiveDate>,

    /// Accompanying motion text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<String>,
}

/// One item of business on a sitting day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessItem {
    /// Normalized item text.
    pub text: String,

    /// Bills debated under this item, when the item carries a bill table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bills: Option<Vec<Bill>>,
}

impl BusinessItem {
    /// Number of bills attached to the item.
    #[must_use]
    pub fn bill_count(&self) -> usize {
        self.bills.as_ref().map_or(0, Vec::len)
    }
}

/// A sitting day and its business, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub business: Vec<BusinessItem>,
}

/// The window of future business ending on a known date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Division heading text, e.g. "Business in the period ending on ...".
    pub title: String,

    /// Explanatory note printed under the heading.
    pub subtitle: String,

    /// Last day of the period.
    pub ending: NaiveDate,

    /// Sitting days in page order.
    pub days: Vec<Day>,
}

impl Period {
    /// Number of business items across all days.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.days.iter().map(|d| d.business.len()).sum()
    }

    /// Number of bills across all days.
    #[must_use]
    pub fn bill_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| &d.business)
            .map(BusinessItem::bill_count)
            .sum()
    }
}

/// A parsed Future Business page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureBusiness {
    pub title: String,
    pub session: Session,

    /// Letter of the Future Business part, e.g. "A".
    pub part: String,

    pub period: Period,
}

impl FutureBusiness {
    /// Create a record with the standard title.
    pub fn new(session: Session, part: impl Into<String>, period: Period) -> Self {
        Self {
            title: FUTURE_BUSINESS_TITLE.to_string(),
            session,
            part: part.into(),
            period,
        }
    }
}
