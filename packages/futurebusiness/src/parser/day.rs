//! Sitting days and their items of business.

use chrono::NaiveDate;

use super::bill::parse_bills;
use super::markers::{BILL_TABLE, DAY_DATE, ITEM};
use super::require;
use crate::dates::resolve_day_date;
use crate::error::{FutureBusinessError, Result};
use crate::html::Node;
use crate::text::normalize;
use crate::types::{BusinessItem, Day};

/// Parse day blocks in page order.
///
/// Day labels carry no year; it is taken from `ending`, the last day of the
/// enclosing period.
pub fn parse_days<'a>(
    day_blocks: impl IntoIterator<Item = Node<'a>>,
    ending: NaiveDate,
) -> Result<Vec<Day>> {
    day_blocks
        .into_iter()
        .map(|block| parse_day(block, ending))
        .collect()
}

/// Parse one day block: its date label and every item of business in it.
pub fn parse_day(block: Node<'_>, ending: NaiveDate) -> Result<Day> {
    let label = require(block, DAY_DATE, "day")?.text_content();
    let date = resolve_day_date(&label, ending)?;

    let business = block
        .find_all(ITEM)
        .map(|item| parse_item(item, ending))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(%date, items = business.len(), "Parsed day");
    Ok(Day { date, business })
}

/// Parse one item of business and the bills listed under it.
pub fn parse_item(item: Node<'_>, ending: NaiveDate) -> Result<BusinessItem> {
    // The first child is the bullet image
    let raw: String = item.children().skip(1).map(|n| n.text_content()).collect();
    let text = normalize(&raw);
    if text.is_empty() {
        return Err(FutureBusinessError::EmptyField {
            field: "business item text".to_string(),
            context: format!("{:?}", item),
        });
    }

    let bills = match item.next_element_sibling().filter(|n| BILL_TABLE.matches(*n)) {
        Some(table) => Some(parse_bills(table, ending)?),
        None => None,
    };

    Ok(BusinessItem { text, bills })
}
