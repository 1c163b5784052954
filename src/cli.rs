//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rank_tracker::config::{
    API_KEY_ENV, DB_PATH, DEFAULT_COUNTRY, DEFAULT_ENDPOINT, DEFAULT_LANGUAGE,
    DEFAULT_MAX_RESULTS, DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
};
use rank_tracker::export::ExportFormat;
use rank_tracker::{LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "rank_tracker",
    version,
    about = "Checks where a website ranks in Google results for a set of keywords."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the brand's rank for each keyword and record the results
    Check(CheckCommand),
    /// Show or export recorded checks, newest first
    History(HistoryCommand),
    /// Delete every recorded check
    Reset(ResetCommand),
    /// List the Indian states and cities available for --state/--city
    Locations,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Brand URL to look for (scheme optional), e.g. https://digitalpiloto.com
    #[arg(long)]
    pub brand_url: String,

    /// Keywords to check (one query each)
    pub keywords: Vec<String>,

    /// File with one keyword per line ("-" for stdin)
    #[arg(long)]
    pub keywords_file: Option<PathBuf>,

    /// Country name or code (gl), e.g. "in", "United States"
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Interface language code (hl)
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Free-text location, e.g. "Kolkata, West Bengal, India"
    #[arg(long)]
    pub location: Option<String>,

    /// Indian state or union territory (composes the location)
    #[arg(long)]
    pub state: Option<String>,

    /// City within --state; cities outside the built-in list are accepted
    #[arg(long, requires = "state")]
    pub city: Option<String>,

    /// Deepest rank scanned per keyword (multiple of --page-size)
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,

    /// Results per search request
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Pause between search requests in milliseconds
    #[arg(long, default_value_t = DEFAULT_PAGE_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// SerpApi key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Database path (SQLite file)
    #[arg(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Write the results as CSV to this file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the scanned SERP links of every keyword
    #[arg(long)]
    pub show_serp: bool,

    /// Write the scanned SERP links as CSV to this file
    #[arg(long)]
    pub serp_output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct HistoryCommand {
    /// Database path (SQLite file)
    #[arg(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Only checks of this keyword
    #[arg(long)]
    pub keyword: Option<String>,

    /// Only checks of this brand
    #[arg(long)]
    pub brand_url: Option<String>,

    /// At most this many records
    #[arg(long)]
    pub limit: Option<usize>,

    /// Export instead of printing a table
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Export destination (stdout if omitted)
    #[arg(long, requires = "format")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ResetCommand {
    /// Database path (SQLite file)
    #[arg(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Confirm deletion of the whole history
    #[arg(long)]
    pub yes: bool,
}
