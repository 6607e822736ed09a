//! Driving port for reading the synthetic book catalogue.
//!
//! Inbound adapters validate request parameters, then ask this port for a page
//! of books or a book's reviews. Implementations decide where the reference
//! date for publication dates comes from.

use async_trait::async_trait;
use book_data::{BookPageQuery, BookRecord, ReviewRecord};

use crate::domain::Error;

/// Port for generating catalogue pages and reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCatalogue: Send + Sync {
    /// Produce one page of books for `query`.
    ///
    /// An unsupported region yields [`crate::domain::ErrorCode::InvalidRequest`]
    /// with the supported codes in the details.
    async fn book_page(&self, query: &BookPageQuery) -> Result<Vec<BookRecord>, Error>;

    /// Produce `count` reviews for the book identified by `isbn`.
    async fn book_reviews(
        &self,
        isbn: &str,
        region: &str,
        count: u32,
    ) -> Result<Vec<ReviewRecord>, Error>;
}
