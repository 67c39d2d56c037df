//! Shared fixtures and fakes for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use profscrape::rmp::{PageFetcher, Result, ScrapeError};
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const BASE_URL: &str = "https://www.ratemyprofessors.com";
pub const PROFESSOR_URL: &str = "https://www.ratemyprofessors.com/professor/2345";
pub const PROFESSOR_PAGE: &str = include_str!("../fixtures/professor_page.html");

/// Fetcher that records how many times it was called.
pub struct CountingFetcher {
    response: std::result::Result<String, StatusCode>,
    calls: AtomicUsize,
}

impl CountingFetcher {
    pub fn serving(html: &str) -> Self {
        Self {
            response: Ok(html.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            response: Err(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for CountingFetcher {
    async fn fetch_page(&self, _url: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(html) => Ok(html.clone()),
            Err(status) => Err(ScrapeError::from_status(*status)),
        }
    }
}
