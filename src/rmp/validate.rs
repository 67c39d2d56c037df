//! Target URL checks, run before any network request is made.

use url::Url;

use super::errors::{Result, ScrapeError};

/// Whether `url` is a non-empty, absolute, syntactically valid URL.
pub fn is_valid_url(url: &str) -> bool {
    !url.is_empty() && Url::parse(url).is_ok()
}

/// Ensure `url` is a professor detail page under `base_url`.
///
/// `base_url` is expected without a trailing slash, e.g.
/// `https://www.ratemyprofessors.com`.
pub fn validate_professor_url(url: &str, base_url: &str) -> Result<()> {
    if !is_valid_url(url) {
        return Err(ScrapeError::InvalidUrl(format!("{url:?} is not a valid URL")));
    }

    if !url.starts_with(&format!("{base_url}/professor/")) {
        return Err(ScrapeError::InvalidUrl(
            "Only Rate My Professor professor URLs are supported".to_string(),
        ));
    }

    Ok(())
}
