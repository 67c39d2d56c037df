//! Field extraction from a parsed professor page.
//!
//! Every function here is pure: it reads the tree and returns owned records.

use std::sync::LazyLock;

use chrono::NaiveDate;
use html_scraper::{ElementRef, Html, Selector};
use regex::Regex;
use tracing::{debug, trace};

use super::document::{class_starts_with, element_text, select_first, select_text};
use super::errors::{Result, ScrapeError};
use super::models::{ProfessorData, ReviewData, SchoolData};

static TEACHER_INFO: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("TeacherInfo__StyledTeacher"));
static PROFESSOR_NAME: LazyLock<Selector> = LazyLock::new(|| class_starts_with("NameTitle__Name"));
static PROFESSOR_TITLE: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("NameTitle__Title"));
static SCHOOL_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="/school"]"#).unwrap());

// Scoped to direct `li > div` children so ad slots injected into the list are skipped.
static REVIEW_LIST: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"ul#ratingsList > li > div[class^="Rating__StyledRating"]"#).unwrap()
});
static RATING_VALUES: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("RatingValues__StyledRatingValues"));
static RATING_CARD: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("CardNumRating__StyledCardNumRating"));
static RATING_CARD_HEADER: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("CardNumRating__CardNumRatingHeader"));
static RATING_CARD_NUMBER: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("CardNumRating__CardNumRatingNumber"));
static RATING_INFO: LazyLock<Selector> = LazyLock::new(|| class_starts_with("Rating__RatingInfo"));
static RATING_HEADER: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("RatingHeader__StyledHeader"));
static RATING_CLASS: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("RatingHeader__StyledClass"));
static TIMESTAMP: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("TimeStamp__StyledTimeStamp"));
static COMMENTS: LazyLock<Selector> =
    LazyLock::new(|| class_starts_with("Comments__StyledComments"));

const QUALITY: &str = "quality";
const DIFFICULTY: &str = "difficulty";

/// Extract the professor and their linked school from the page header.
///
/// `base_url` is prepended to the school's relative `href`.
pub fn extract_professor(
    document: &Html,
    source_url: &str,
    base_url: &str,
) -> Result<ProfessorData> {
    let teacher = select_first(document.root_element(), &TEACHER_INFO)
        .ok_or_else(|| ScrapeError::PageStructure("Page not found".to_string()))?;

    let name = select_text(teacher, &PROFESSOR_NAME);

    let school = teacher
        .select(&PROFESSOR_TITLE)
        .find_map(|title| select_first(title, &SCHOOL_LINK))
        .map(|anchor| SchoolData {
            name: element_text(anchor),
            rmp_url: format!("{base_url}{}", anchor.attr("href").unwrap_or_default()),
        });

    if school.is_none() {
        debug!(professor = name.as_str(), "No school linked on professor page");
    }

    Ok(ProfessorData {
        name,
        rmp_url: source_url.to_string(),
        school,
    })
}

/// Extract every review in `ul#ratingsList`, in page order.
///
/// Fails on the first malformed review; no partial list is returned.
pub fn extract_reviews(document: &Html) -> Result<Vec<ReviewData>> {
    let reviews = document
        .select(&REVIEW_LIST)
        .enumerate()
        .map(|(index, element)| {
            extract_review(element).inspect_err(|e| {
                debug!(index, error = %e, "Failed to extract review");
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = reviews.len(), "Extracted reviews");
    Ok(reviews)
}

/// Extract a single review block.
pub fn extract_review(review: ElementRef<'_>) -> Result<ReviewData> {
    let (quality_rating, difficulty_rating) = parse_review_ratings(review)?;

    let header =
        select_first(review, &RATING_INFO).and_then(|info| select_first(info, &RATING_HEADER));
    let (subject_name, timestamp) = match header {
        Some(header) => (
            select_text(header, &RATING_CLASS),
            select_text(header, &TIMESTAMP),
        ),
        None => (String::new(), String::new()),
    };

    Ok(ReviewData {
        subject_name,
        published_at: parse_review_date(&timestamp)?,
        content: select_text(review, &COMMENTS),
        quality_rating,
        difficulty_rating,
    })
}

/// Read the labeled numeric cards of a review as `(quality, difficulty)`.
fn parse_review_ratings(review: ElementRef<'_>) -> Result<(f64, f64)> {
    let cards: Vec<(String, String)> = review
        .select(&RATING_VALUES)
        .flat_map(|values| values.select(&RATING_CARD))
        .map(|card| {
            (
                select_text(card, &RATING_CARD_HEADER).to_lowercase(),
                select_text(card, &RATING_CARD_NUMBER),
            )
        })
        .collect();

    trace!(?cards, "Rating cards");

    Ok((rating_for(&cards, QUALITY)?, rating_for(&cards, DIFFICULTY)?))
}

/// Value of the first card whose header equals `label`.
///
/// `NaN` and infinities are rejected along with non-numeric text.
fn rating_for(cards: &[(String, String)], label: &'static str) -> Result<f64> {
    let (_, raw) = cards
        .iter()
        .find(|(header, _)| header == label)
        .ok_or(ScrapeError::MissingRating { label })?;

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScrapeError::InvalidRating {
            label,
            value: raw.clone(),
        })
}

/// Parse a review timestamp such as `"Aug 15th, 2020"` into a calendar date.
///
/// Only the first ordinal suffix directly following the day digits is
/// removed, so month names like `August` are left intact.
pub fn parse_review_date(raw: &str) -> Result<NaiveDate> {
    static ORDINAL_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\d{1,2})(?:st|nd|rd|th)\b").unwrap());
    const FORMATS: &[&str] = &["%B %d, %Y", "%B %d %Y", "%Y-%m-%d"];

    let cleaned = ORDINAL_RE.replacen(raw.trim(), 1, "${1}");

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .ok_or_else(|| ScrapeError::DateParse {
            raw: raw.to_string(),
        })
}
