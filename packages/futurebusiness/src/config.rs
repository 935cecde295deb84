//! Configuration constants and page catalogue for the scraper.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{FutureBusinessError, Result};

/// Root URL of the House of Commons Future Business publication.
pub const URL_ROOT: &str = "http://www.publications.parliament.uk/pa/cm/cmfbusi/";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum HTTP response size in bytes (10 MB).
///
/// A Future Business page is a few hundred kilobytes at most.
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// Default output file for the generated XML.
pub const DEFAULT_OUTPUT: &str = "bizparse.xml";

/// A page of the Future Business publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// Contents page listing the other parts.
    Index,
    /// Part A: business in the coming period.
    Business,
    /// Part B: business in Westminster Hall.
    Westminster,
    /// Part C: remaining orders and notices.
    Remaining,
    /// Part D: other future business.
    Other,
    /// Part E: European Union documents.
    European,
    /// Part F: written ministerial statements.
    Statements,
}

impl Part {
    /// Every page, in publication order.
    pub const ALL: [Part; 7] = [
        Part::Index,
        Part::Business,
        Part::Westminster,
        Part::Remaining,
        Part::Other,
        Part::European,
        Part::Statements,
    ];

    /// Name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Index => "index",
            Part::Business => "business",
            Part::Westminster => "westminster",
            Part::Remaining => "remaining",
            Part::Other => "other",
            Part::European => "european",
            Part::Statements => "statements",
        }
    }

    /// File name of the page under the publication root.
    pub fn file_name(&self) -> &'static str {
        match self {
            Part::Index => "fbusi.htm",
            Part::Business => "a01.htm",
            Part::Westminster => "b01.htm",
            Part::Remaining => "c01.htm",
            Part::Other => "d01.htm",
            Part::European => "e01.htm",
            Part::Statements => "f01.htm",
        }
    }

    /// Letter printed at the top of the page; the index has none.
    pub fn letter(&self) -> Option<char> {
        match self {
            Part::Index => None,
            Part::Business => Some('A'),
            Part::Westminster => Some('B'),
            Part::Remaining => Some('C'),
            Part::Other => Some('D'),
            Part::European => Some('E'),
            Part::Statements => Some('F'),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a publication URL root.
///
/// # Arguments
/// * `root` - URL root to validate
///
/// # Returns
/// * `Ok(())` if the root is an http(s) URL ending in `/`
/// * `Err(FutureBusinessError::InvalidUrlRoot)` otherwise
///
/// # Examples
/// ```
/// use futurebusiness::config::validate_url_root;
///
/// assert!(validate_url_root("http://www.publications.parliament.uk/pa/cm/cmfbusi/").is_ok());
/// assert!(validate_url_root("ftp://example.org/").is_err());
/// assert!(validate_url_root("https://example.org/cmfbusi").is_err());
/// ```
pub fn validate_url_root(root: &str) -> Result<()> {
    let has_scheme = root.starts_with("http://") || root.starts_with("https://");
    if has_scheme && root.ends_with('/') && !root.chars().any(char::is_whitespace) {
        Ok(())
    } else {
        Err(FutureBusinessError::InvalidUrlRoot(root.to_string()))
    }
}

/// Build the URL of a page under a publication root.
///
/// # Examples
/// ```
/// use futurebusiness::config::{page_url, Part, URL_ROOT};
///
/// assert_eq!(
///     page_url(URL_ROOT, Part::Business),
///     "http://www.publications.parliament.uk/pa/cm/cmfbusi/a01.htm"
/// );
/// ```
pub fn page_url(root: &str, part: Part) -> String {
    debug_assert!(
        validate_url_root(root).is_ok(),
        "root should be validated before calling page_url"
    );
    format!("{root}{}", part.file_name())
}

/// Build the path of a page in a local mirror of the publication.
pub fn page_path(dir: &Path, part: Part) -> PathBuf {
    dir.join(part.file_name())
}
