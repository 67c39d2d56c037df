//! Records produced by a single professor page scrape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The institution linked from a professor's page header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolData {
    pub name: String,
    /// Absolute URL of the school's page on RateMyProfessors.
    pub rmp_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorData {
    pub name: String,
    /// The professor page URL the data was scraped from.
    pub rmp_url: String,
    /// `None` when the page has no linked institution.
    pub school: Option<SchoolData>,
}

/// A single review block, as rendered on the professor page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    /// Course label shown in the review header, e.g. `"CS1083"`.
    pub subject_name: String,
    pub published_at: NaiveDate,
    pub content: String,
    pub quality_rating: f64,
    pub difficulty_rating: f64,
}

/// Result of scraping one professor page.
///
/// `reviews` follows the page's display order, which is not necessarily
/// chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedResult {
    pub professor: ProfessorData,
    pub reviews: Vec<ReviewData>,
}
