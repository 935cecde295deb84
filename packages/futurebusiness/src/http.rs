//! HTTP client wrapper for downloading Future Business pages.

use std::io::Read;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{FutureBusinessError, Result};

/// User agent string identifying this scraper.
const USER_AGENT: &str = concat!("futurebusiness/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download content from a URL with retry logic.
///
/// Uses exponential backoff for transient failures (network errors, 5xx responses).
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `max_size` - Largest accepted response body, in bytes
///
/// # Returns
/// Raw bytes of the response body
pub fn download_bytes(client: &Client, url: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                // Client errors (4xx) won't succeed on retry
                let response = response
                    .error_for_status()
                    .map_err(|source| FutureBusinessError::PageDownload {
                        url: url.to_string(),
                        source,
                    })?;
                return read_limited(response, url, max_size);
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(FutureBusinessError::Http(e));
            }
        }
    }

    Err(FutureBusinessError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

/// Read a response body, refusing anything larger than `max_size`.
fn read_limited(
    response: reqwest::blocking::Response,
    url: &str,
    max_size: u64,
) -> Result<Vec<u8>> {
    let too_large = || FutureBusinessError::ResponseTooLarge {
        url: url.to_string(),
        limit: max_size,
    };

    if response.content_length().is_some_and(|len| len > max_size) {
        return Err(too_large());
    }

    let mut body = Vec::new();
    response.take(max_size.saturating_add(1)).read_to_end(&mut body)?;
    if body.len() as u64 > max_size {
        return Err(too_large());
    }
    Ok(body)
}

/// Decode a page body as UTF-8.
///
/// Invalid sequences are replaced with U+FFFD and a warning naming `context`
/// is logged.
pub fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(
                context,
                valid_up_to = e.valid_up_to(),
                "Invalid UTF-8, decoding lossily"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
