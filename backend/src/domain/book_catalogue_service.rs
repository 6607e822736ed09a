//! Catalogue service backed by the deterministic generator.
//!
//! Publication dates are anchored to the current UTC day read from the
//! injected clock, so a page is byte-identical for the whole day and tests can
//! pin the day with a fixed clock.

use std::sync::Arc;

use async_trait::async_trait;
use book_data::{
    BookPageQuery, BookRecord, GenerationError, ReviewRecord, generate_books, generate_reviews,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde_json::json;
use tracing::error;

use crate::domain::Error;
use crate::domain::ports::BookCatalogue;

/// [`BookCatalogue`] implementation that generates records on demand.
#[derive(Clone)]
pub struct GeneratedBookCatalogue {
    clock: Arc<dyn Clock>,
}

impl GeneratedBookCatalogue {
    /// Create a catalogue reading the reference day from `clock`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::GeneratedBookCatalogue;
    /// use mockable::DefaultClock;
    ///
    /// let _catalogue = GeneratedBookCatalogue::new(Arc::new(DefaultClock));
    /// ```
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    fn reference_date(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

#[async_trait]
impl BookCatalogue for GeneratedBookCatalogue {
    async fn book_page(&self, query: &BookPageQuery) -> Result<Vec<BookRecord>, Error> {
        generate_books(query, self.reference_date()).map_err(map_generation_error)
    }

    async fn book_reviews(
        &self,
        isbn: &str,
        region: &str,
        count: u32,
    ) -> Result<Vec<ReviewRecord>, Error> {
        generate_reviews(isbn, region, count).map_err(map_generation_error)
    }
}

/// Map a generator rejection onto the client-facing error.
///
/// Only the region gate is a client error at this point; every other
/// rejection means the adapter let an invalid value through.
fn map_generation_error(err: GenerationError) -> Error {
    match err {
        GenerationError::UnsupportedRegion { ref code, ref supported } => {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": "region",
                "value": code,
                "supportedRegions": supported,
            }))
        }
        other => {
            error!(error = %other, "generator rejected adapter-validated parameters");
            Error::internal(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    #[fixture]
    fn catalogue() -> GeneratedBookCatalogue {
        let utc_now = Utc
            .with_ymd_and_hms(2026, 10, 16, 23, 59, 0)
            .single()
            .expect("valid fixture timestamp");
        GeneratedBookCatalogue::new(Arc::new(FixtureClock { utc_now }))
    }

    #[rstest]
    #[tokio::test]
    async fn pages_use_the_clock_day_as_reference(catalogue: GeneratedBookCatalogue) {
        let query = BookPageQuery::new("en", 42, 0);
        let reference = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");

        let books = catalogue.book_page(&query).await.expect("page");
        let expected = generate_books(&query, reference).expect("direct page");

        assert_eq!(books, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn unsupported_region_lists_supported_codes(catalogue: GeneratedBookCatalogue) {
        let err = catalogue
            .book_page(&BookPageQuery::new("xx", 42, 0))
            .await
            .expect_err("unsupported region");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details().and_then(|details| details.get("supportedRegions")),
            Some(&json!(["en", "fr", "de", "es"]))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn other_rejections_become_internal_errors(catalogue: GeneratedBookCatalogue) {
        let err = catalogue
            .book_reviews("", "en", 3)
            .await
            .expect_err("empty isbn");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn reviews_match_the_generator(catalogue: GeneratedBookCatalogue) {
        let reviews = catalogue
            .book_reviews("9780306406157", "fr", 4)
            .await
            .expect("reviews");
        assert_eq!(
            reviews,
            generate_reviews("9780306406157", "fr", 4).expect("direct reviews")
        );
    }
}
