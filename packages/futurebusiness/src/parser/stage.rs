//! Bill stage rewriting.
//!
//! The stage text of a bill heading can hide two facts: whether the bill was
//! amended in the Public Bill Committee, and the date an earlier debate was
//! adjourned on. Each rewrite is a separate step; [`resolve_stage`] runs them
//! in order.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::dates::{resolve_adjourned_date, DateParseError};

/// Stage name used for bills coming back from the Public Bill Committee.
pub const REPORT_STAGE: &str = "Report stage";

/// Suffix removed from bill names.
const BILL_SUFFIX: &str = " BILL";

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COMMITTEE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<amended>As|Not) amended in the Public Bill Committee, to be considered\.?")
        .expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ADJOURNED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Adjourned debate on (?P<stage>.+) \[(?P<date>.+)\]").expect("valid regex")
});

/// A bill stage with the facts extracted from it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub text: String,
    pub committee_amended: bool,
    pub adjourned: Option<NaiveDate>,
}

impl Stage {
    /// A raw stage with nothing extracted yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            committee_amended: false,
            adjourned: None,
        }
    }
}

/// "As/Not amended in the Public Bill Committee, to be considered." becomes
/// [`REPORT_STAGE`], recording whether the bill was amended.
pub fn detect_committee_amendment(stage: Stage) -> Stage {
    let Some(caps) = COMMITTEE_PATTERN.captures(&stage.text) else {
        return stage;
    };
    let committee_amended = caps.name("amended").is_some_and(|m| m.as_str() == "As");
    Stage {
        text: REPORT_STAGE.to_string(),
        committee_amended,
        ..stage
    }
}

/// "Adjourned debate on STAGE [DATE]" becomes STAGE, with DATE resolved
/// against the end of the period.
pub fn detect_adjournment(stage: Stage, ending: NaiveDate) -> Result<Stage, DateParseError> {
    let Some(caps) = ADJOURNED_PATTERN.captures(&stage.text) else {
        return Ok(stage);
    };
    let (Some(inner), Some(date)) = (caps.name("stage"), caps.name("date")) else {
        return Ok(stage);
    };
    let adjourned = resolve_adjourned_date(date.as_str(), ending)?;
    Ok(Stage {
        text: inner.as_str().to_string(),
        adjourned: Some(adjourned),
        ..stage
    })
}

/// Drop trailing full stops.
pub fn trim_stage(stage: Stage) -> Stage {
    let text = stage.text.trim().trim_end_matches('.').trim_end().to_string();
    Stage { text, ..stage }
}

/// Run every stage rewrite in order.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use futurebusiness::parser::stage::resolve_stage;
///
/// let ending = NaiveDate::from_ymd_opt(2011, 11, 25).unwrap();
/// let stage = resolve_stage("Adjourned debate on Second reading [12 November].", ending).unwrap();
/// assert_eq!(stage.text, "Second reading");
/// assert_eq!(stage.adjourned, NaiveDate::from_ymd_opt(2011, 11, 12));
/// ```
pub fn resolve_stage(raw: &str, ending: NaiveDate) -> Result<Stage, DateParseError> {
    let stage = detect_committee_amendment(Stage::new(raw.trim()));
    let stage = detect_adjournment(stage, ending)?;
    Ok(trim_stage(stage))
}

/// Remove the trailing " BILL" from a bill name, in any letter case.
///
/// # Examples
/// ```
/// use futurebusiness::parser::stage::trim_bill_name;
///
/// assert_eq!(trim_bill_name("EDUCATION BILL"), "EDUCATION");
/// assert_eq!(trim_bill_name("Pensions Bill"), "Pensions");
/// assert_eq!(trim_bill_name("Billericay"), "Billericay");
/// ```
pub fn trim_bill_name(name: &str) -> String {
    let name = name.trim();
    let cut = name
        .len()
        .checked_sub(BILL_SUFFIX.len())
        .filter(|&at| name.is_char_boundary(at) && name[at..].eq_ignore_ascii_case(BILL_SUFFIX));
    match cut {
        Some(at) => name[..at].trim_end().to_string(),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_committee_amended() {
        let stage = detect_committee_amendment(Stage::new(
            "As amended in the Public Bill Committee, to be considered.",
        ));
        assert_eq!(stage.text, REPORT_STAGE);
        assert!(stage.committee_amended);
    }

    #[test]
    fn test_committee_not_amended() {
        let stage = detect_committee_amendment(Stage::new(
            "Not amended in the Public Bill Committee, to be considered.",
        ));
        assert_eq!(stage.text, REPORT_STAGE);
        assert!(!stage.committee_amended);
    }

    #[test]
    fn test_committee_no_match() {
        let stage = detect_committee_amendment(Stage::new("Second reading."));
        assert_eq!(stage, Stage::new("Second reading."));
    }

    #[test]
    fn test_adjournment() {
        let stage = detect_adjournment(
            Stage::new("Adjourned debate on Second reading [12 November]."),
            ymd(2011, 11, 25),
        )
        .unwrap();
        assert_eq!(stage.text, "Second reading");
        assert_eq!(stage.adjourned, Some(ymd(2011, 11, 12)));
        assert!(!stage.committee_amended);
    }

    #[test]
    fn test_adjournment_december_boundary() {
        let stage = detect_adjournment(
            Stage::new("Adjourned debate on Second reading [2 December]"),
            ymd(2012, 3, 9),
        )
        .unwrap();
        assert_eq!(stage.adjourned, Some(ymd(2011, 12, 2)));
    }

    #[test]
    fn test_adjournment_bad_date() {
        let result = detect_adjournment(
            Stage::new("Adjourned debate on Second reading [the other day]"),
            ymd(2011, 11, 25),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_adjournment_no_match() {
        let stage = detect_adjournment(Stage::new("Second reading"), ymd(2011, 11, 25)).unwrap();
        assert_eq!(stage.adjourned, None);
        assert_eq!(stage.text, "Second reading");
    }

    #[test]
    fn test_trim_stage() {
        assert_eq!(trim_stage(Stage::new("Second reading.")).text, "Second reading");
        assert_eq!(trim_stage(Stage::new("Second reading")).text, "Second reading");
    }

    #[test]
    fn test_resolve_stage_pipeline_order() {
        // Committee rewrite happens first and produces a plain report stage
        let stage = resolve_stage(
            "As amended in the Public Bill Committee, to be considered.",
            ymd(2011, 11, 25),
        )
        .unwrap();
        assert_eq!(stage.text, "Report stage");
        assert!(stage.committee_amended);
        assert_eq!(stage.adjourned, None);
    }

    #[test]
    fn test_resolve_stage_adjourned_report_stage() {
        let stage = resolve_stage(
            "Adjourned debate on Report stage [4 November].",
            ymd(2011, 11, 25),
        )
        .unwrap();
        assert_eq!(stage.text, "Report stage");
        assert_eq!(stage.adjourned, Some(ymd(2011, 11, 4)));
    }

    #[test]
    fn test_trim_bill_name() {
        assert_eq!(trim_bill_name("DAYLIGHT SAVING BILL"), "DAYLIGHT SAVING");
        assert_eq!(trim_bill_name("Education Bill"), "Education");
        assert_eq!(trim_bill_name("Pensions Bill "), "Pensions");
        assert_eq!(trim_bill_name("BILL"), "BILL");
        assert_eq!(trim_bill_name("Gaelic Language"), "Gaelic Language");
    }
}
