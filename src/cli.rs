use clap::Parser;
use std::path::PathBuf;

/// Scrape a property listing page and get an analyst's take on it.
#[derive(Debug, Parser)]
#[command(name = "property_analyst", version, about)]
pub struct Cli {
    /// Listing page to analyze. Prompted for on stdin when omitted.
    pub url: Option<String>,

    /// Fetch through the JS-rendering API instead of a plain GET.
    #[arg(long)]
    pub render: bool,

    /// Ceiling for the rendering fetch, in seconds.
    #[arg(long, value_name = "SECS")]
    pub render_timeout: Option<u64>,

    /// Directory that receives the per-domain output folder.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Also export the listings as an .xlsx spreadsheet.
    #[arg(long)]
    pub xlsx: bool,

    /// TOML file overriding the listing selectors.
    #[arg(long, value_name = "FILE")]
    pub selectors: Option<PathBuf>,

    /// Completion model (defaults to OPENAI_MODEL, then gpt-4o).
    #[arg(long)]
    pub model: Option<String>,

    /// Append-only log file (defaults to PROPERTY_ANALYST_LOG, then ./property_scraper.log).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log to the file only.
    #[arg(short, long)]
    pub quiet: bool,
}
