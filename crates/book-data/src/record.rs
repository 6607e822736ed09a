//! Generated record types and the page request that produces them.
//!
//! Records are plain immutable values. Field names serialise in camelCase to
//! match the wire format consumed by the catalogue UI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of records on the first page.
pub const FIRST_PAGE_SIZE: u32 = 20;

/// Number of records on every page after the first.
///
/// Clients treat a page with fewer records than this as the last page.
pub const PAGE_SIZE: u32 = 10;

/// Returns the number of records generated for `page`.
///
/// # Example
///
/// ```
/// use book_data::page_size;
///
/// assert_eq!(page_size(0), 20);
/// assert_eq!(page_size(1), 10);
/// ```
#[must_use]
pub const fn page_size(page: u32) -> u32 {
    if page == 0 { FIRST_PAGE_SIZE } else { PAGE_SIZE }
}

/// Parameters for one page of generated books.
///
/// # Example
///
/// ```
/// use book_data::BookPageQuery;
///
/// let query = BookPageQuery::new("en", 42, 0)
///     .with_expected_likes(2.5)
///     .with_review_count(3);
/// assert_eq!(query.review_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BookPageQuery {
    /// Region code; validated by the generator.
    pub region: String,
    /// Base seed chosen by the caller; may be negative.
    pub seed: i64,
    /// Zero-based page number.
    pub page: u32,
    /// Expected likes per book; may be fractional.
    pub expected_likes: f64,
    /// Review count copied into every record.
    pub review_count: u32,
}

impl BookPageQuery {
    /// Creates a query with zero expected likes and zero reviews.
    #[must_use]
    pub fn new(region: impl Into<String>, seed: i64, page: u32) -> Self {
        Self {
            region: region.into(),
            seed,
            page,
            expected_likes: 0.0,
            review_count: 0,
        }
    }

    /// Sets the expected likes per book.
    #[must_use]
    pub fn with_expected_likes(mut self, expected_likes: f64) -> Self {
        self.expected_likes = expected_likes;
        self
    }

    /// Sets the review count copied into every record.
    #[must_use]
    pub fn with_review_count(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }
}

/// A generated book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Global position across pages.
    pub index: u64,
    /// Thirteen-digit EAN-13 style identifier.
    pub isbn: String,
    /// Product-style title.
    pub title: String,
    /// Author names; always exactly one entry.
    pub authors: Vec<String>,
    /// Publisher company name.
    pub publisher: String,
    /// Realised like count.
    pub likes: u32,
    /// Review count requested by the caller.
    pub review_count: u32,
    /// Publication date within ten years of the reference date.
    pub published_date: NaiveDate,
}

/// A generated review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Reviewer full name.
    pub user: String,
    /// Template sentence followed by a filler sentence.
    pub text: String,
}
