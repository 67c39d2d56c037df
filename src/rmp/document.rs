//! Thin adapter over [`html_scraper`] for querying rendered professor pages.
//!
//! RateMyProfessors renders styled-components class names such as
//! `NameTitle__Name-dowf0z-0 cfjPUG`. The hashed suffix changes between
//! deploys, so elements are matched on the stable class-name prefix instead.

use html_scraper::{ElementRef, Html, Selector};

/// Parse a full HTML page into a read-only tree.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// CSS source for an attribute-prefix match on `class`.
pub fn class_prefix_css(prefix: &str) -> String {
    format!(r#"[class^="{prefix}"]"#)
}

/// Selector matching any element whose `class` attribute starts with `prefix`.
///
/// Panics if `prefix` contains a double quote; callers pass literal prefixes.
pub fn class_starts_with(prefix: &str) -> Selector {
    let css = class_prefix_css(prefix);
    Selector::parse(&css).expect("class prefix produces a valid selector")
}

/// First descendant of `scope` matching `selector`.
pub fn select_first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Text of a single element with surrounding whitespace trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Concatenated text of every descendant of `scope` matching `selector`, trimmed.
///
/// Yields an empty string when nothing matches.
pub fn select_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}
