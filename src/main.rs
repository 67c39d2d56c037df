use anyhow::Context;
use clap::Parser;
use profscrape::cli::Args;
use profscrape::config::Config;
use profscrape::logging::setup_logging;
use profscrape::rmp::{HttpFetcher, PageFetcher, RmpScraper, StaticFetcher};
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error};

const PROMPT: &str = "Enter a Rate My Professor URL to scrape (e.g. https://www.ratemyprofessors.com/professor/1)";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    setup_logging(&config, args.tracing);
    debug!(?config, "Configuration loaded");

    match run(args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "Scrape failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let url = match args.url {
        Some(url) => url,
        None => prompt_for_url().await?,
    };

    let result = match &args.from_file {
        Some(path) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            scrape_with(StaticFetcher::new(html), config, &url).await?
        }
        None => {
            let fetcher = match &config.user_agent {
                Some(ua) => HttpFetcher::with_user_agent(ua)?,
                None => HttpFetcher::new(),
            };
            scrape_with(fetcher, config, &url).await?
        }
    };

    eprintln!("Reviews found: {}", result.reviews.len());

    let json = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");
    Ok(())
}

async fn scrape_with<F: PageFetcher>(
    fetcher: F,
    config: &Config,
    url: &str,
) -> anyhow::Result<profscrape::rmp::ScrapedResult> {
    RmpScraper::with_base_url(fetcher, &config.rmp_base_url)
        .scrape_professor_reviews(url)
        .await
        .with_context(|| format!("Failed to scrape {url}"))
}

async fn prompt_for_url() -> anyhow::Result<String> {
    eprint!("{PROMPT}\n> ");
    std::io::stderr().flush()?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read URL from stdin")?;
    Ok(line.trim().to_string())
}
