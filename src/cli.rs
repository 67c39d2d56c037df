use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_SHORT"), ")");

/// Scrape a RateMyProfessors professor page into JSON.
#[derive(Parser, Debug)]
#[command(name = "profscrape")]
#[command(about = "Scrape professor reviews from a RateMyProfessors page")]
#[command(version, long_version = LONG_VERSION)]
pub struct Args {
    /// Professor page URL. Prompted for on stdin when omitted.
    pub url: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = default_tracing_format())]
    pub tracing: TracingFormat,

    /// Read the page HTML from a file instead of fetching it
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TracingFormat {
    /// Human-readable, colored output
    Pretty,
    /// One JSON object per line
    Json,
}

/// Pretty in debug builds, JSON in release builds.
fn default_tracing_format() -> TracingFormat {
    if cfg!(debug_assertions) {
        TracingFormat::Pretty
    } else {
        TracingFormat::Json
    }
}
