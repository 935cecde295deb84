//! Retrieval of Future Business pages from the web or a local mirror.

use std::fs;
use std::path::PathBuf;

use crate::config::DEFAULT_MAX_RESPONSE_SIZE;
use crate::error::Result;
use crate::html::Document;
use crate::http::{bytes_to_string, create_client, download_bytes};

/// Where a page is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Download the page over HTTP.
    Remote { url: String },
    /// Read a saved copy of the page.
    Local { path: PathBuf },
}

impl Source {
    /// Human readable location, for logs and messages.
    pub fn describe(&self) -> String {
        match self {
            Source::Remote { url } => url.clone(),
            Source::Local { path } => path.display().to_string(),
        }
    }
}

/// Read the HTML text of a page.
pub fn fetch_html(source: &Source) -> Result<String> {
    let bytes = match source {
        Source::Remote { url } => {
            let client = create_client()?;
            tracing::info!(url = %url, "Downloading page");
            download_bytes(&client, url, DEFAULT_MAX_RESPONSE_SIZE)?
        }
        Source::Local { path } => {
            tracing::info!(path = %path.display(), "Reading page");
            fs::read(path)?
        }
    };
    Ok(bytes_to_string(&bytes, &source.describe()))
}

/// Read and parse a page.
pub fn fetch_document(source: &Source) -> Result<Document> {
    let html = fetch_html(source)?;
    Ok(Document::parse(&html))
}
