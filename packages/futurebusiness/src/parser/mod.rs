//! Extraction of [`FutureBusiness`] from a Future Business page.
//!
//! The page layout is fixed. Every element the parser needs is located by
//! its marker (see [`markers`]); anything missing or shaped differently
//! aborts the parse with a schema mismatch rather than producing a partial
//! record.
//!
//! - [`parse_future_business`]: session, part letter and business period
//! - [`period`]: division heading, note and days
//! - [`day`]: sitting days and items of business
//! - [`bill`]: Private Members' Bills listed under an item
//! - [`stage`]: bill stage rewrites

pub mod bill;
pub mod day;
pub mod markers;
pub mod period;
pub mod stage;

use crate::error::{FutureBusinessError, Result};
use crate::html::{Document, Marker, Node};
use crate::text::{normalize, strip_label};
use crate::types::{FutureBusiness, Session};

use markers::{BOLD, CELL, MAIN_CONTENT, PART_LETTER, TABLE};

/// Label in front of the session years.
const SESSION_LABEL: &str = "Session";

/// Position of the session cell in the session table.
const SESSION_CELL_POSITION: usize = 1;

/// Find the first descendant of `node` matching `marker`, or fail.
pub(crate) fn require<'a>(node: Node<'a>, marker: Marker<'_>, context: &str) -> Result<Node<'a>> {
    node.find(marker)
        .ok_or_else(|| FutureBusinessError::schema(marker.to_string(), context))
}

/// Parse a Future Business page.
///
/// # Errors
/// Fails on the first element that is missing or does not have the expected
/// shape; no partial record is returned.
pub fn parse_future_business(document: &Document) -> Result<FutureBusiness> {
    let content = require(document.root(), MAIN_CONTENT, "document")?;

    let session = parse_session(content)?;
    let part = parse_part(content)?;
    let business = find_business_table(content)?;
    let period = period::parse_period(business)?;

    tracing::info!(
        session = %format!("{}-{}", session.start, session.end),
        part = %part,
        days = period.days.len(),
        "Parsed Future Business"
    );

    Ok(FutureBusiness::new(session, part, period))
}

/// Parse the session from the first table of the main content.
pub fn parse_session(content: Node<'_>) -> Result<Session> {
    let table = require(content, TABLE, "main content")?;
    let cell = table
        .find_all(CELL)
        .nth(SESSION_CELL_POSITION)
        .ok_or_else(|| FutureBusinessError::schema("session cell", "session table"))?;
    let descriptor = require(cell, BOLD, "session cell")?.text_content();

    Session::parse(&strip_label(&descriptor, SESSION_LABEL))
}

/// Parse the single-letter part marker.
pub fn parse_part(content: Node<'_>) -> Result<String> {
    let letter = normalize(&require(content, PART_LETTER, "main content")?.text_content());

    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(letter),
        _ => Err(FutureBusinessError::schema(
            "single-letter part marker",
            format!("'{letter}'"),
        )),
    }
}

/// Find the business table: the table after the preamble table.
///
/// The preamble is the first top-level table after the session table. It
/// sits in a `<p>` that the page never closes properly; depending on the
/// document mode the HTML5 parser either keeps both tables inside that
/// paragraph or hoists them out of it, so only their sibling order is relied
/// on.
pub fn find_business_table(content: Node<'_>) -> Result<Node<'_>> {
    let session = require(content, TABLE, "main content")?;
    let preamble = content
        .find_all(TABLE)
        .find(|table| *table != session && !table.is_inside(session))
        .ok_or_else(|| FutureBusinessError::schema("preamble table", "main content"))?;
    preamble.next_siblings_matching(TABLE).next().ok_or_else(|| {
        FutureBusinessError::schema("business table after the preamble", "main content")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn page(session: &str, letter: &str, business: &str) -> String {
        format!(
            r#"<html><head><title>House of Commons Future Business</title></head><body>
<div id="maincontent">
<table><tr><td>House of Commons</td><td><b>{session}</b></td></tr></table>
<p><table><tr><td>Preamble</td></tr></table>
{business}
</p>
<span class="charFutureBusinessDivisionLetter">{letter}</span>
</div></body></html>"#
        )
    }

    const BUSINESS: &str = r#"<table><tr><td>
<div class="paraFutureBusinessDivisionHeading"><span class="x">A</span><br>Business in the period ending on Thursday 17 November 2011</div>
<div class="paraFutureBusinessDivisionNote">Provisional.</div>
<div class="FutureBusinessDay"><div class="paraFutureBusinessDate">Monday 14 November</div>
<div class="paraFutureBusinessListItem"><img src="b.gif">Opposition Day</div></div>
</td></tr></table>"#;

    #[test]
    fn test_parse_future_business() {
        let doc = Document::parse(&page("Session&nbsp;2010-12", "A", BUSINESS));
        let fb = parse_future_business(&doc).unwrap();

        assert_eq!(fb.title, "House of Commons Future Business");
        assert_eq!(fb.session, Session { start: "2010".to_string(), end: "2012".to_string() });
        assert_eq!(fb.part, "A");
        assert_eq!(fb.period.ending, NaiveDate::from_ymd_opt(2011, 11, 17).unwrap());
        assert_eq!(fb.period.days.len(), 1);
    }

    #[test]
    fn test_session_label_variants() {
        for descriptor in ["Session 2010-12", "Session\u{a0}2010-12", " 2010-12 "] {
            let doc = Document::parse(&page(descriptor, "A", BUSINESS));
            let content = require(doc.root(), MAIN_CONTENT, "document").unwrap();
            let session = parse_session(content).unwrap();
            assert_eq!(session.end, "2012", "descriptor {descriptor:?}");
        }
    }

    #[test]
    fn test_missing_main_content() {
        let doc = Document::parse("<html><body><div id='other'></div></body></html>");
        let err = parse_future_business(&doc).unwrap_err();
        assert!(err.is_schema_mismatch());
        assert!(err.to_string().contains("div#maincontent"));
    }

    #[test]
    fn test_missing_session_cell() {
        let html = r#"<div id="maincontent"><table><tr><td>Only one cell</td></tr></table></div>"#;
        let doc = Document::parse(html);
        let err = parse_future_business(&doc).unwrap_err();
        assert!(err.to_string().contains("session cell"));
    }

    #[test]
    fn test_part_must_be_single_letter() {
        let doc = Document::parse(&page("Session 2010-12", "A1", BUSINESS));
        let err = parse_future_business(&doc).unwrap_err();
        assert!(err.to_string().contains("single-letter part marker"));
    }

    #[test]
    fn test_missing_part() {
        let html = page("Session 2010-12", "A", BUSINESS)
            .replace("charFutureBusinessDivisionLetter", "somethingElse");
        let doc = Document::parse(&html);
        let err = parse_future_business(&doc).unwrap_err();
        assert!(err.to_string().contains("span.charFutureBusinessDivisionLetter"));
    }

    #[test]
    fn test_parse_with_doctype() {
        let doctypes = [
            "<!DOCTYPE html>",
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#,
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#,
        ];
        for doctype in doctypes {
            let html = format!("{doctype}\n{}", page("Session 2010-12", "A", BUSINESS));
            let doc = Document::parse(&html);
            let fb = parse_future_business(&doc).unwrap();
            assert_eq!(fb.period.ending, NaiveDate::from_ymd_opt(2011, 11, 17).unwrap());
            assert_eq!(fb.period.days.len(), 1, "doctype {doctype}");
        }
    }

    #[test]
    fn test_business_table_without_paragraph() {
        let html = page("Session 2010-12", "A", BUSINESS)
            .replace("<p>", "")
            .replace("</p>", "");
        let doc = Document::parse(&html);
        let content = require(doc.root(), MAIN_CONTENT, "document").unwrap();
        let business = find_business_table(content).unwrap();
        assert!(business.text_content().contains("Opposition Day"));
    }

    #[test]
    fn test_missing_preamble() {
        let html = r#"<div id="maincontent">
<table><tr><td>House of Commons</td><td><b>Session 2010-12</b></td></tr></table>
</div>"#;
        let doc = Document::parse(html);
        let content = require(doc.root(), MAIN_CONTENT, "document").unwrap();
        let err = find_business_table(content).unwrap_err();
        assert!(err.to_string().contains("preamble table"));
    }

    #[test]
    fn test_missing_business_table() {
        let doc = Document::parse(&page("Session 2010-12", "A", ""));
        let err = parse_future_business(&doc).unwrap_err();
        assert!(err.to_string().contains("business table after the preamble"));
    }
}
