//! Scrape professor details and reviews from RateMyProfessors professor pages.
//!
//! ```no_run
//! # async fn run() -> profscrape::rmp::Result<()> {
//! let result = profscrape::rmp::scrape_professor_reviews(
//!     "https://www.ratemyprofessors.com/professor/2345",
//! )
//! .await?;
//! println!("{} reviews for {}", result.reviews.len(), result.professor.name);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod rmp;
