//! Private Member's Bill extraction from a bill detail table.

use chrono::NaiveDate;

use super::markers::{BILL_HEADING, MEMBER_IN_CHARGE, MOTION_TEXT, ROW};
use super::stage::{resolve_stage, trim_bill_name};
use crate::error::{FutureBusinessError, Result};
use crate::html::Node;
use crate::text::{normalize, strip_label};
use crate::types::{Bill, House};

/// Label in front of the member in charge of a bill.
const MEMBER_LABEL: &str = "Member in charge:";

/// Rows after a heading row that may carry the member and the motion.
const DETAIL_ROWS: usize = 2;

/// Name, raw stage and house taken from a bill heading.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Heading {
    name: String,
    stage: String,
    house: House,
}

/// Parse every bill of a bill detail table, in row order.
///
/// Rows without a Private Member's Bill heading are skipped.
pub fn parse_bills(table: Node<'_>, ending: NaiveDate) -> Result<Vec<Bill>> {
    let mut bills = Vec::new();
    for row in table.find_all(ROW) {
        if let Some(bill) = parse_bill(row, ending)? {
            bills.push(bill);
        }
    }
    Ok(bills)
}

/// Parse one row of a bill detail table.
///
/// Returns `Ok(None)` when the row carries no bill heading. Dates without a
/// year are resolved against `ending`, the last day of the enclosing period.
pub fn parse_bill(row: Node<'_>, ending: NaiveDate) -> Result<Option<Bill>> {
    let Some(heading_row) = row.find(ROW) else {
        return Ok(None);
    };
    let headings: Vec<_> = heading_row.find_all(BILL_HEADING).collect();
    if headings.is_empty() {
        return Ok(None);
    }

    // The first heading is the bill's number on the order paper
    let heading = headings
        .get(1)
        .ok_or_else(|| {
            FutureBusinessError::schema(format!("second {BILL_HEADING}"), "bill row")
        })?;
    let Heading { name, stage, house } = split_heading(*heading)?;

    let stage = resolve_stage(&stage, ending)?;
    let (member, motion) = member_and_motion(row);
    let name = trim_bill_name(&name);

    tracing::debug!(
        bill = %name,
        stage = %stage.text,
        house = house.as_str(),
        "Parsed bill"
    );

    Ok(Some(Bill {
        name,
        stage: stage.text,
        committee_amended: stage.committee_amended,
        house,
        member,
        adjourned: stage.adjourned,
        motion,
    }))
}

/// Split a bill heading into name and stage.
///
/// A plain heading is a single "NAME: STAGE" fragment. A "[Lords]" qualifier
/// is marked up separately and splits the heading into three fragments:
/// "NAME [", "Lords", "]: STAGE".
fn split_heading(heading: Node<'_>) -> Result<Heading> {
    let fragments: Vec<String> = heading.children().map(|n| n.text_content()).collect();

    match fragments.as_slice() {
        [single] => {
            let text = normalize(single);
            let (name, stage) = text.split_once(": ").ok_or_else(|| {
                FutureBusinessError::schema("'NAME: STAGE' bill heading", format!("'{text}'"))
            })?;
            Ok(Heading {
                name: name.trim().to_string(),
                stage: stage.trim().to_string(),
                house: House::Commons,
            })
        }
        [name, _qualifier, stage] => {
            let name = normalize(name);
            let stage = normalize(stage);
            Ok(Heading {
                name: name.trim_end_matches('[').trim().to_string(),
                stage: stage
                    .trim_start_matches(']')
                    .trim_start_matches(':')
                    .trim()
                    .to_string(),
                house: House::Lords,
            })
        }
        other => Err(FutureBusinessError::schema(
            "bill heading of one fragment, or three with a [Lords] qualifier",
            format!("heading split into {} fragments: {other:?}", other.len()),
        )),
    }
}

/// Read the member in charge and the motion from the rows after `row`.
///
/// The lookahead stops at the next bill's heading row, so a bill listed
/// without a member never takes the following bill's member.
fn member_and_motion(row: Node<'_>) -> (Option<String>, Option<String>) {
    let mut member = None;
    let mut motion = None;

    let details = row
        .next_siblings_matching(ROW)
        .take(DETAIL_ROWS)
        .take_while(|next| next.find(BILL_HEADING).is_none());
    for next in details {
        if let Some(node) = next.find(MEMBER_IN_CHARGE) {
            member = Some(strip_label(&node.text_content(), MEMBER_LABEL))
                .filter(|s| !s.is_empty());
        }
        if let Some(node) = next.find(MOTION_TEXT) {
            motion = Some(normalize(&node.text_content())).filter(|s| !s.is_empty());
        }
    }

    (member, motion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{Document, Marker};
    use pretty_assertions::assert_eq;

    fn ending() -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 11, 25).unwrap()
    }

    /// Wrap bill rows the way the page does: an outer table whose first row
    /// holds the heading in a nested table, followed by member and motion rows.
    fn bill_table(heading: &str, extra_rows: &str) -> String {
        format!(
            r#"<table class="BusinessItem"><tbody>
<tr><td><table><tr>
<td><div class="paraFBPrivateMembersBillItemHeading">1</div></td>
<td><div class="paraFBPrivateMembersBillItemHeading">{heading}</div></td>
</tr></table></td></tr>
{extra_rows}
</tbody></table>"#
        )
    }

    fn parse(html: &str) -> Result<Vec<Bill>> {
        let doc = Document::parse(html);
        let table = doc
            .root()
            .find(Marker::class("table", "BusinessItem"))
            .unwrap();
        parse_bills(table, ending())
    }

    #[test]
    fn test_commons_bill() {
        let html = bill_table(
            "EDUCATION BILL: Second reading.",
            r#"<tr><td><div class="paraMemberinCharge">Member in charge:&nbsp;Mr Graham Stuart</div></td></tr>"#,
        );
        let bills = parse(&html).unwrap();

        assert_eq!(
            bills,
            vec![Bill {
                name: "EDUCATION".to_string(),
                stage: "Second reading".to_string(),
                committee_amended: false,
                house: House::Commons,
                member: Some("Mr Graham Stuart".to_string()),
                adjourned: None,
                motion: None,
            }]
        );
    }

    #[test]
    fn test_mixed_case_heading() {
        let bills = parse(&bill_table("Education Bill: Second reading", "")).unwrap();
        assert_eq!(bills[0].name, "Education");
        assert_eq!(bills[0].stage, "Second reading");
        assert_eq!(bills[0].house, House::Commons);
        assert_eq!(bills[0].member, None);
    }

    #[test]
    fn test_lords_bill() {
        let bills = parse(&bill_table(
            "Pensions Bill [<span>Lords</span>]: Second reading",
            "",
        ))
        .unwrap();

        assert_eq!(bills[0].house, House::Lords);
        assert_eq!(bills[0].name, "Pensions");
        assert_eq!(bills[0].stage, "Second reading");
    }

    #[test]
    fn test_committee_and_motion() {
        let html = bill_table(
            "SUNBEDS (REGULATION) BILL: As amended in the Public Bill Committee, to be considered.",
            r#"<tr><td><div class="paraMemberinCharge">Member in charge: Julie Morgan</div></td></tr>
<tr><td><div class="paraMotionText">That the Bill be now read the Third time.&nbsp;</div></td></tr>"#,
        );
        let bill = parse(&html).unwrap().remove(0);

        assert_eq!(bill.name, "SUNBEDS (REGULATION)");
        assert_eq!(bill.stage, "Report stage");
        assert!(bill.committee_amended);
        assert_eq!(bill.member.as_deref(), Some("Julie Morgan"));
        assert_eq!(
            bill.motion.as_deref(),
            Some("That the Bill be now read the Third time.")
        );
    }

    #[test]
    fn test_adjourned_bill() {
        let bill = parse(&bill_table(
            "DAYLIGHT SAVING BILL: Adjourned debate on Second reading [4 November].",
            "",
        ))
        .unwrap()
        .remove(0);

        assert_eq!(bill.stage, "Second reading");
        assert_eq!(bill.adjourned, NaiveDate::from_ymd_opt(2011, 11, 4));
    }

    #[test]
    fn test_detail_lookahead_is_two_rows() {
        let html = bill_table(
            "ZOOS BILL: Second reading",
            r#"<tr><td>spacer</td></tr>
<tr><td>spacer</td></tr>
<tr><td><div class="paraMemberinCharge">Member in charge: Too Far</div></td></tr>"#,
        );
        let bills = parse(&html).unwrap();
        assert_eq!(bills[0].member, None);
    }

    #[test]
    fn test_rows_without_heading_are_skipped() {
        let html = r#"<table class="BusinessItem">
<tr><td><table><tr><td>no heading</td></tr></table></td></tr>
</table>"#;
        assert!(parse(html).unwrap().is_empty());
    }

    #[test]
    fn test_unexpected_fragment_count_is_fatal() {
        let err = parse(&bill_table("A <i>B</i> C <i>D</i>: Second reading", "")).unwrap_err();
        assert!(err.is_schema_mismatch());
        assert!(err.to_string().contains("fragments"));
    }

    #[test]
    fn test_missing_separator_is_fatal() {
        let err = parse(&bill_table("EDUCATION BILL - Second reading", "")).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn test_bad_adjournment_date_is_fatal() {
        let err = parse(&bill_table(
            "ZOOS BILL: Adjourned debate on Second reading [31 November]",
            "",
        ))
        .unwrap_err();
        assert!(matches!(err, FutureBusinessError::DateParse(_)));
    }

    #[test]
    fn test_bills_keep_row_order() {
        let html = r#"<table class="BusinessItem"><tbody>
<tr><td><table><tr><td><div class="paraFBPrivateMembersBillItemHeading">1</div><div class="paraFBPrivateMembersBillItemHeading">FIRST BILL: Second reading</div></td></tr></table></td></tr>
<tr><td><div class="paraMemberinCharge">Member in charge: One</div></td></tr>
<tr><td><table><tr><td><div class="paraFBPrivateMembersBillItemHeading">2</div><div class="paraFBPrivateMembersBillItemHeading">SECOND BILL: Second reading</div></td></tr></table></td></tr>
<tr><td><div class="paraMemberinCharge">Member in charge: Two</div></td></tr>
</tbody></table>"#;
        let bills = parse(html).unwrap();

        let names: Vec<_> = bills.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["FIRST", "SECOND"]);
        assert_eq!(bills[0].member.as_deref(), Some("One"));
        assert_eq!(bills[1].member.as_deref(), Some("Two"));
    }

    #[test]
    fn test_member_is_not_taken_from_next_bill() {
        let html = r#"<table class="BusinessItem">
<tr><td><table><tr><td><div class="paraFBPrivateMembersBillItemHeading">1</div><div class="paraFBPrivateMembersBillItemHeading">FIRST BILL: Second reading</div></td></tr></table></td></tr>
<tr><td><table><tr><td><div class="paraFBPrivateMembersBillItemHeading">2</div><div class="paraFBPrivateMembersBillItemHeading">SECOND BILL: Second reading</div></td></tr></table></td></tr>
<tr><td><div class="paraMemberinCharge">Member in charge: Two</div></td></tr>
<tr><td><div class="paraMotionText">That the Bill be now read a Second time.</div></td></tr>
</table>"#;
        let bills = parse(html).unwrap();

        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].member, None);
        assert_eq!(bills[0].motion, None);
        assert_eq!(bills[1].member.as_deref(), Some("Two"));
        assert_eq!(
            bills[1].motion.as_deref(),
            Some("That the Bill be now read a Second time.")
        );
    }
}
