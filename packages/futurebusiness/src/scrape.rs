//! Scrape service that ties retrieval, parsing and provenance together.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Part;
use crate::error::Result;
use crate::fetch::{fetch_document, Source};
use crate::html::Document;
use crate::parser::parse_future_business;
use crate::types::FutureBusiness;

/// A parsed page together with where and when it was retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scrape {
    pub business: FutureBusiness,
    /// Canonical URL of the page.
    pub url: String,
    /// Local date of retrieval.
    pub fetched: NaiveDate,
}

/// Retrieve and parse the business page.
///
/// # Arguments
/// * `source` - Where to read the HTML from
/// * `page_url` - Canonical URL recorded in the output, also for local copies
///
/// # Returns
/// The parsed record stamped with today's date
pub fn scrape(source: &Source, page_url: &str) -> Result<Scrape> {
    let document = fetch_document(source)?;
    let fetched = chrono::Local::now().date_naive();
    scrape_document(&document, page_url, fetched)
}

/// Parse an already loaded business page.
pub fn scrape_document(document: &Document, page_url: &str, fetched: NaiveDate) -> Result<Scrape> {
    let business = parse_future_business(document)?;

    let expected = Part::Business.letter();
    if business.part.chars().next() != expected {
        tracing::warn!(
            part = %business.part,
            expected = ?expected,
            "Part marker does not match the business page"
        );
    }

    Ok(Scrape {
        business,
        url: page_url.to_string(),
        fetched,
    })
}
