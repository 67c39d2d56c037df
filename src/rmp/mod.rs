//! RateMyProfessors professor page scraper.
//!
//! A scrape is a single pass: validate the URL, fetch the page once, parse it
//! and pull out the professor header and the review list. Nothing is cached
//! between calls.

pub mod document;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod validate;

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

pub use errors::{Result, ScrapeError};
pub use fetch::{HttpFetcher, PageFetcher, StaticFetcher};
pub use models::{ProfessorData, ReviewData, SchoolData, ScrapedResult};

/// Public site root, used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.ratemyprofessors.com";

const SLOW_FETCH_THRESHOLD: Duration = Duration::from_secs(5);

/// Scrapes professor pages through a [`PageFetcher`].
pub struct RmpScraper<F = HttpFetcher> {
    fetcher: F,
    base_url: String,
}

impl Default for RmpScraper {
    fn default() -> Self {
        Self::new(HttpFetcher::new())
    }
}

impl<F: PageFetcher> RmpScraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_base_url(fetcher, DEFAULT_BASE_URL)
    }

    /// Use a different site root, e.g. a mirror or a local test server.
    pub fn with_base_url(fetcher: F, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Scrape the professor and every review from a professor page URL.
    ///
    /// The URL is checked before any request is made. Extraction is
    /// all-or-nothing: one malformed review fails the whole call.
    #[instrument(level = "debug", skip(self))]
    pub async fn scrape_professor_reviews(&self, url: &str) -> Result<ScrapedResult> {
        validate::validate_professor_url(url, &self.base_url)?;

        let start = Instant::now();
        let html = self.fetcher.fetch_page(url).await?;
        report_fetch_timing(url, start.elapsed());

        let result = self.scrape_html(url, &html)?;
        info!(
            professor = result.professor.name.as_str(),
            reviews = result.reviews.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Scraped professor page"
        );
        Ok(result)
    }

    /// Run extraction over already-fetched markup for `url`.
    pub fn scrape_html(&self, url: &str, html: &str) -> Result<ScrapedResult> {
        let document = document::parse_document(html);
        let professor = extract::extract_professor(&document, url, &self.base_url)?;
        let reviews = extract::extract_reviews(&document)?;
        Ok(ScrapedResult { professor, reviews })
    }
}

fn is_slow_fetch(elapsed: Duration) -> bool {
    elapsed > SLOW_FETCH_THRESHOLD
}

/// Log how long fetching `url` took, as a warning once it crosses the slow threshold.
fn report_fetch_timing(url: &str, elapsed: Duration) {
    let elapsed_ms = elapsed.as_millis() as u64;
    if is_slow_fetch(elapsed) {
        warn!(url, elapsed_ms, "Slow professor page fetch");
    } else {
        debug!(url, elapsed_ms, "Fetched professor page");
    }
}

/// Scrape `url` from the public site with a default HTTP client.
pub async fn scrape_professor_reviews(url: &str) -> Result<ScrapedResult> {
    RmpScraper::<HttpFetcher>::default()
        .scrape_professor_reviews(url)
        .await
}
