//! Markers of the fixed Future Business page layout.

use crate::html::Marker;

/// Container of everything the parser reads.
pub const MAIN_CONTENT: Marker<'static> = Marker::id("div", "maincontent");

/// Any table; the first one in the main content holds the session.
pub const TABLE: Marker<'static> = Marker::tag("table");
pub const CELL: Marker<'static> = Marker::tag("td");
pub const ROW: Marker<'static> = Marker::tag("tr");
pub const BOLD: Marker<'static> = Marker::tag("b");

/// Letter of the Future Business part, e.g. "A".
pub const PART_LETTER: Marker<'static> = Marker::class("span", "charFutureBusinessDivisionLetter");

pub const DIVISION_HEADING: Marker<'static> =
    Marker::class("div", "paraFutureBusinessDivisionHeading");
pub const DIVISION_NOTE: Marker<'static> = Marker::class("div", "paraFutureBusinessDivisionNote");

pub const DAY: Marker<'static> = Marker::class("div", "FutureBusinessDay");
pub const DAY_DATE: Marker<'static> = Marker::class("div", "paraFutureBusinessDate");
pub const ITEM: Marker<'static> = Marker::class("div", "paraFutureBusinessListItem");

/// Bill detail table following an item of business.
pub const BILL_TABLE: Marker<'static> = Marker::class("table", "BusinessItem");
pub const BILL_HEADING: Marker<'static> =
    Marker::class("div", "paraFBPrivateMembersBillItemHeading");
pub const MEMBER_IN_CHARGE: Marker<'static> = Marker::class("div", "paraMemberinCharge");
pub const MOTION_TEXT: Marker<'static> = Marker::class("div", "paraMotionText");
