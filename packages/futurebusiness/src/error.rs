//! Error types for the scraper.
//!
//! Uses the dual-error pattern: `FutureBusinessError` for library consumers
//! with detailed error context, and specific error types (such as
//! [`DateParseError`]) for internal use.

use thiserror::Error;

use crate::dates::DateParseError;

/// Main error type for the scraper library.
#[derive(Debug, Error)]
pub enum FutureBusinessError {
    /// A required page element is absent or has an unrecognized shape.
    #[error("Schema mismatch: expected {element} in {context}")]
    SchemaMismatch { element: String, context: String },

    /// Date text does not follow the expected grammar.
    #[error("Schema mismatch: {0}")]
    DateParse(#[from] DateParseError),

    /// A required text field is empty after normalization.
    #[error("Empty {field} in {context}")]
    EmptyField { field: String, context: String },

    /// Invalid URL root.
    #[error("Invalid URL root: '{0}'. Expected an http(s) URL ending in '/'")]
    InvalidUrlRoot(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download a Future Business page.
    #[error("Failed to download {url}: {source}")]
    PageDownload {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts failed.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Response body exceeded the size limit.
    #[error("Response from {url} exceeds the {limit} byte limit")]
    ResponseTooLarge { url: String, limit: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML output failed.
    #[error("XML output failed: {0}")]
    XmlWrite(String),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

impl FutureBusinessError {
    /// Build a [`FutureBusinessError::SchemaMismatch`].
    pub fn schema(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Whether this error means the page did not follow the fixed schema.
    ///
    /// Date grammar failures and empty required fields count as schema
    /// mismatches: the page is not the one the parser understands.
    #[must_use]
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(
            self,
            Self::SchemaMismatch { .. } | Self::DateParse(_) | Self::EmptyField { .. }
        )
    }
}

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, FutureBusinessError>;
