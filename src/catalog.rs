//! Catalog keys derived from a scrape.
//!
//! Downstream storage files schools, professors and subjects under a URL-safe
//! slug of their display name. Subjects repeat across reviews, so they are
//! de-duplicated here before anything is persisted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::rmp::ScrapedResult;

/// A named catalog item and its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub slug: String,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(name: &str) -> Self {
        Self {
            slug: create_slug(name),
            name: name.to_string(),
        }
    }
}

/// Symbols spelled out instead of dropped.
fn symbol_word(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("and"),
        '$' => Some("dollar"),
        '%' => Some("percent"),
        '<' => Some("less"),
        '>' => Some("greater"),
        '|' => Some("or"),
        _ => None,
    }
}

/// Letters that have no canonical decomposition but a conventional ASCII spelling.
fn ascii_letter(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'Æ' => Some("AE"),
        'ø' => Some("o"),
        'Ø' => Some("O"),
        'œ' => Some("oe"),
        'Œ' => Some("OE"),
        'đ' => Some("d"),
        'Đ' => Some("D"),
        'ł' => Some("l"),
        'Ł' => Some("L"),
        'þ' => Some("th"),
        'Þ' => Some("TH"),
        _ => None,
    }
}

/// Build a lower-case, hyphen-separated ASCII slug.
///
/// Only ASCII letters, digits and whitespace survive, so punctuation
/// (hyphens included) is removed rather than turned into a separator:
/// `"Jean-Luc O'Neil"` becomes `"jeanluc-oneil"`.
pub fn create_slug(input: &str) -> String {
    let mut kept = String::with_capacity(input.len());

    for c in input.nfd() {
        if unicode_normalization::char::is_combining_mark(c) {
            continue;
        }
        if let Some(word) = symbol_word(c).or_else(|| ascii_letter(c)) {
            kept.push_str(word);
        } else if c.is_ascii_alphanumeric() || c.is_whitespace() {
            kept.push(c);
        }
    }

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

impl ScrapedResult {
    pub fn school_entry(&self) -> Option<CatalogEntry> {
        self.professor
            .school
            .as_ref()
            .map(|school| CatalogEntry::new(&school.name))
    }

    pub fn professor_entry(&self) -> CatalogEntry {
        CatalogEntry::new(&self.professor.name)
    }

    /// Subjects referenced by the reviews, one per slug, in first-seen order.
    ///
    /// When two names share a slug the first spelling is kept.
    pub fn subject_entries(&self) -> Vec<CatalogEntry> {
        let mut by_slug: IndexMap<String, CatalogEntry> = IndexMap::new();
        for review in &self.reviews {
            let entry = CatalogEntry::new(&review.subject_name);
            by_slug.entry(entry.slug.clone()).or_insert(entry);
        }
        by_slug.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rmp::{ProfessorData, ReviewData, SchoolData};
    use chrono::NaiveDate;

    fn review(subject: &str) -> ReviewData {
        ReviewData {
            subject_name: subject.to_string(),
            published_at: NaiveDate::from_ymd_opt(2020, 8, 15).unwrap(),
            content: String::new(),
            quality_rating: 4.0,
            difficulty_rating: 3.0,
        }
    }

    fn result(school: Option<&str>, subjects: &[&str]) -> ScrapedResult {
        ScrapedResult {
            professor: ProfessorData {
                name: "José García".to_string(),
                rmp_url: "https://www.ratemyprofessors.com/professor/1".to_string(),
                school: school.map(|name| SchoolData {
                    name: name.to_string(),
                    rmp_url: "https://www.ratemyprofessors.com/school/1516".to_string(),
                }),
            },
            reviews: subjects.iter().map(|s| review(s)).collect(),
        }
    }

    #[test]
    fn slug_removes_listed_punctuation() {
        assert_eq!(
            create_slug("Univ. of Texas (San Antonio)"),
            "univ-of-texas-san-antonio"
        );
    }

    #[test]
    fn slug_folds_accents() {
        assert_eq!(create_slug("José García"), "jose-garcia");
        assert_eq!(create_slug("Müller Straße"), "muller-strasse");
    }

    #[test]
    fn slug_strict_drops_hyphens_and_apostrophes() {
        assert_eq!(create_slug("Jean-Luc O'Neil"), "jeanluc-oneil");
    }

    #[test]
    fn slug_spells_out_symbols() {
        assert_eq!(create_slug("Texas A&M"), "texas-aandm");
    }

    #[test]
    fn slug_trims_and_collapses_whitespace() {
        assert_eq!(create_slug("  CS   1083 \t"), "cs-1083");
    }

    #[test]
    fn slug_of_punctuation_only_is_empty() {
        assert_eq!(create_slug("!!! ..."), "");
    }

    #[test]
    fn subject_entries_dedupe_in_first_seen_order() {
        let scraped = result(None, &["CS 1083", "MAT1214", "cs 1083", "CS2123"]);
        let entries = scraped.subject_entries();
        let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["cs-1083", "mat1214", "cs2123"]);
        assert_eq!(entries[0].name, "CS 1083");
    }

    #[test]
    fn school_entry_absent_without_school() {
        assert_eq!(result(None, &[]).school_entry(), None);
    }

    #[test]
    fn school_and_professor_entries() {
        let scraped = result(Some("University of Texas at San Antonio"), &[]);
        assert_eq!(
            scraped.school_entry().unwrap().slug,
            "university-of-texas-at-san-antonio"
        );
        assert_eq!(scraped.professor_entry().slug, "jose-garcia");
    }
}
