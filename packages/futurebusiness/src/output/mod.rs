//! Output generation for scraped Future Business records.

mod xml;
mod yaml;

pub use xml::{generate_xml, save_xml};
pub use yaml::generate_yaml;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::scrape::Scrape;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Xml,
    Yaml,
}

impl OutputFormat {
    /// Render a scrape in this format.
    pub fn render(self, scrape: &Scrape) -> Result<String> {
        match self {
            OutputFormat::Xml => generate_xml(scrape),
            OutputFormat::Yaml => generate_yaml(scrape),
        }
    }
}

/// Render a scrape and write it to `path` atomically.
pub fn save(scrape: &Scrape, path: &Path, format: OutputFormat) -> Result<()> {
    let content = format.render(scrape)?;
    write_atomic(path, &content)?;
    tracing::info!(path = %path.display(), ?format, "Saved output");
    Ok(())
}

/// Write `content` to `path` atomically.
///
/// Writes to a temp file next to `path`, syncs it to disk, then renames it
/// over `path`, so an existing file is never left half written. The temp
/// file is removed again if any step after creating it fails.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    let mut file = File::create(&temp_file)?;
    let result = write_and_rename(&mut file, &temp_file, path, content);
    drop(file);
    if result.is_err() {
        if let Err(e) = fs::remove_file(&temp_file) {
            tracing::warn!(
                path = %temp_file.display(),
                error = %e,
                "Failed to remove temp file"
            );
        }
    }
    Ok(result?)
}

fn write_and_rename(
    file: &mut File,
    temp_file: &Path,
    path: &Path,
    content: &str,
) -> io::Result<()> {
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(temp_file, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bizparse.xml");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join(".bizparse.xml.tmp").exists());
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("bizparse.xml");
        assert!(write_atomic(&path, "x").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_atomic_failure_removes_temp_file() {
        let dir = tempdir().unwrap();
        // A non-empty directory in the way makes the final rename fail
        let path = dir.path().join("bizparse.xml");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        assert!(write_atomic(&path, "new").is_err());

        assert!(!dir.path().join(".bizparse.xml.tmp").exists());
        assert!(path.join("keep").exists());
    }
}
