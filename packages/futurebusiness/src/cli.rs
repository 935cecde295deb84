//! Command-line interface for the scraper.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{page_path, page_url, validate_url_root, Part, DEFAULT_OUTPUT, URL_ROOT};
use crate::error::Result;
use crate::fetch::Source;
use crate::output::{save, OutputFormat};
use crate::scrape::scrape;

/// Future Business scraper - Parse the House of Commons Future Business pages into XML.
#[derive(Parser)]
#[command(name = "futurebusiness")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the business page (part A) and write it out.
    Parse {
        /// Read a saved copy of the page instead of downloading it
        #[arg(short, long, conflicts_with = "dir")]
        file: Option<PathBuf>,

        /// Read the page from a local mirror of the publication
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Publication root URL
        #[arg(long, default_value = URL_ROOT)]
        url_root: String,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
        format: OutputFormat,

        /// Only report errors
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the pages of the publication.
    Pages {
        /// Publication root URL
        #[arg(long, default_value = URL_ROOT)]
        url_root: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            dir,
            url_root,
            output,
            format,
            quiet,
        } => {
            validate_url_root(&url_root)?;
            let url = page_url(&url_root, Part::Business);
            let source = match (file, dir) {
                (Some(path), _) => Source::Local { path },
                (None, Some(dir)) => Source::Local {
                    path: page_path(&dir, Part::Business),
                },
                (None, None) => Source::Remote { url: url.clone() },
            };
            parse_command(&source, &url, &output, format, quiet)
        }
        Commands::Pages { url_root } => pages_command(&url_root),
    }
}

/// Execute the parse command.
fn parse_command(
    source: &Source,
    url: &str,
    output: &Path,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        println!(
            "{} {}",
            style("Parsing").bold(),
            style(source.describe()).cyan()
        );
        println!();
    }

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Reading page...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let record = match scrape(source, url) {
        Ok(record) => record,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Saving output...");
    if let Err(e) = save(&record, output, format) {
        pb.finish_and_clear();
        return Err(e);
    }
    pb.finish_and_clear();

    if !quiet {
        let business = &record.business;
        let period = &business.period;
        println!(
            "  Session: {}",
            style(format!("{}-{}", business.session.start, business.session.end)).green()
        );
        println!("  Part: {}", business.part);
        println!("  Period ending: {}", style(period.ending).green());
        println!("  Days: {}", period.days.len());
        println!("  Items: {}", period.item_count());
        println!("  Bills: {}", period.bill_count());
        println!();
        println!("{} {}", style("Saved to:").green().bold(), output.display());
    }

    Ok(())
}

/// Execute the pages command.
fn pages_command(url_root: &str) -> Result<()> {
    validate_url_root(url_root)?;

    for part in Part::ALL {
        let letter = part.letter().map(String::from).unwrap_or_else(|| "-".to_string());
        println!(
            "{} {:<12} {}",
            style(letter).bold(),
            part.as_str(),
            page_url(url_root, part)
        );
    }

    Ok(())
}
