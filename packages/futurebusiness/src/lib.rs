//! Future Business scraper - Parse the House of Commons Future Business pages.
//!
//! This crate reads the "Future Business" pages published by the House of
//! Commons and extracts a typed record of the business ahead: the session,
//! the business period, its sitting days, the items of business on each day
//! and the Private Members' Bills listed under them. The record is written
//! out as XML.
//!
//! # Example
//!
//! ```
//! use futurebusiness::html::Document;
//! use futurebusiness::parser::parse_future_business;
//!
//! let doc = Document::parse("<div id='maincontent'></div>");
//! let err = parse_future_business(&doc).unwrap_err();
//! assert!(err.is_schema_mismatch());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and the page catalogue
//! - [`types`]: Domain model (Session, Period, Day, BusinessItem, Bill)
//! - [`error`]: Error types and Result alias
//! - [`text`]: Text normalization
//! - [`dates`]: Date parsing and year resolution
//! - [`html`]: HTML document tree and marker queries
//! - [`parser`]: Extraction of the domain model from a page
//! - [`http`]: HTTP client for downloading pages
//! - [`fetch`]: Page retrieval from the web or a local mirror
//! - [`scrape`]: Retrieval, parsing and provenance in one call
//! - [`output`]: XML and YAML output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod fetch;
pub mod html;
pub mod http;
pub mod output;
pub mod parser;
pub mod scrape;
pub mod text;
pub mod types;

// Re-export main functions
pub use parser::parse_future_business;
pub use scrape::{scrape, Scrape};

// Re-export commonly used items
pub use config::Part;
pub use error::{FutureBusinessError, Result};
pub use types::{Bill, BusinessItem, Day, FutureBusiness, House, Period, Session};
