//! XML writer for scraped Future Business records.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{FutureBusinessError, Result};
use crate::scrape::Scrape;
use crate::types::{Bill, BusinessItem, Day};

/// ISO date format used for every date attribute.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Attribute value marking a bill amended in the Public Bill Committee.
const COMMITTEE_AMENDED: &str = "committee";

/// Thin event writer with indentation and error mapping.
struct XmlBuilder {
    writer: Writer<Vec<u8>>,
}

impl XmlBuilder {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| FutureBusinessError::XmlWrite(e.to_string()))
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let mut start = BytesStart::new(name);
        for &attribute in attributes {
            start.push_attribute(attribute);
        }
        self.event(Event::Start(start))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attributes)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn finish(self) -> Result<String> {
        let mut xml = String::from_utf8(self.writer.into_inner())
            .map_err(|e| FutureBusinessError::XmlWrite(e.to_string()))?;
        xml.push('\n');
        Ok(xml)
    }
}

/// Generate the XML document for a scrape.
///
/// Absent optional fields (member, motion, adjournment date, committee
/// amendment) omit their element or attribute. An item without bills has
/// neither a `bills` attribute nor a `<bills>` child.
pub fn generate_xml(scrape: &Scrape) -> Result<String> {
    let business = &scrape.business;
    let period = &business.period;
    let fetched = scrape.fetched.format(DATE_FORMAT).to_string();
    let ending = period.ending.format(DATE_FORMAT).to_string();

    let mut xml = XmlBuilder::new();
    xml.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.start(
        "futurebusiness",
        &[
            ("url", scrape.url.as_str()),
            ("fetched", fetched.as_str()),
            ("session-start", business.session.start.as_str()),
            ("session-end", business.session.end.as_str()),
            ("part", business.part.as_str()),
        ],
    )?;
    xml.text_element("title", &[], &period.title)?;
    xml.text_element("subtitle", &[], &period.subtitle)?;

    xml.start("period", &[("ending", ending.as_str())])?;
    for day in &period.days {
        write_day(&mut xml, day)?;
    }
    xml.end("period")?;

    xml.end("futurebusiness")?;
    xml.finish()
}

fn write_day(xml: &mut XmlBuilder, day: &Day) -> Result<()> {
    let date = day.date.format(DATE_FORMAT).to_string();
    xml.start("day", &[("date", date.as_str())])?;
    for item in &day.business {
        write_item(xml, item)?;
    }
    xml.end("day")
}

fn write_item(xml: &mut XmlBuilder, item: &BusinessItem) -> Result<()> {
    let bills = item.bills.as_deref().filter(|bills| !bills.is_empty());

    match bills {
        Some(bills) => {
            let count = bills.len().to_string();
            xml.start("item", &[("bills", count.as_str())])?;
            xml.text_element("text", &[], &item.text)?;
            xml.start("bills", &[])?;
            for bill in bills {
                write_bill(xml, bill)?;
            }
            xml.end("bills")?;
        }
        None => {
            xml.start("item", &[])?;
            xml.text_element("text", &[], &item.text)?;
        }
    }

    xml.end("item")
}

fn write_bill(xml: &mut XmlBuilder, bill: &Bill) -> Result<()> {
    let adjourned = bill.adjourned.map(|d| d.format(DATE_FORMAT).to_string());

    let mut attributes = vec![("house", bill.house.as_str())];
    if let Some(date) = adjourned.as_deref() {
        attributes.push(("adjourned", date));
    }
    xml.start("bill", &attributes)?;

    xml.text_element("name", &[], &bill.name)?;
    if let Some(member) = &bill.member {
        xml.text_element("member", &[], member)?;
    }
    let stage_attributes: &[(&str, &str)] = if bill.committee_amended {
        &[("amended", COMMITTEE_AMENDED)]
    } else {
        &[]
    };
    xml.text_element("stage", stage_attributes, &bill.stage)?;
    if let Some(motion) = &bill.motion {
        xml.text_element("motion", &[], motion)?;
    }

    xml.end("bill")
}

/// Save a scrape as an XML file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
///
/// # Arguments
/// * `scrape` - The scrape to save
/// * `path` - Output file
pub fn save_xml(scrape: &Scrape, path: &Path) -> Result<()> {
    super::save(scrape, path, super::OutputFormat::Xml)
}
