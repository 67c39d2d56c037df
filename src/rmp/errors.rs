//! Error types for the RateMyProfessors page scraper.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to fetch page: {status} {reason}")]
    Fetch { status: u16, reason: String },
    #[error("Request failed")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    PageStructure(String),
    #[error("Review is missing a {label:?} rating")]
    MissingRating { label: &'static str },
    #[error("Review has a non-numeric {label:?} rating: {value:?}")]
    InvalidRating { label: &'static str, value: String },
    #[error("Invalid date format: {raw:?}")]
    DateParse { raw: String },
}

impl ScrapeError {
    /// Build a [`ScrapeError::Fetch`] from an unsuccessful response status.
    pub fn from_status(status: StatusCode) -> Self {
        Self::Fetch {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// HTTP status of a failed fetch, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
