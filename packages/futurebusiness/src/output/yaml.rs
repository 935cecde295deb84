//! YAML rendering of a scrape, for reviewing parser output by eye.

use crate::error::Result;
use crate::scrape::Scrape;

/// Generate a YAML document for a scrape.
///
/// The document mirrors the serde form of [`Scrape`], starting with a `---`
/// marker and without trailing whitespace on any line.
pub fn generate_yaml(scrape: &Scrape) -> Result<String> {
    let yaml_string = serde_yaml_ng::to_string(scrape)?;

    let lines: Vec<&str> = yaml_string.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}
