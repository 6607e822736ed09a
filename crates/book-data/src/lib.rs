//! Deterministic synthetic book catalogue and review generation.
//!
//! This crate turns explicit inputs into reproducible pages of book records
//! and reproducible review lists. Nothing is stored: calling a generator twice
//! with the same inputs yields identical output, in this process or any other.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Paged book generation keyed by `(region, seed, page)`, with 20 records on
//!   the first page and 10 on every later page
//! - Review generation keyed by ISBN alone, independent of seed and page
//! - Stochastic rounding of fractional like expectations
//! - Locale tables for `en`, `fr`, `de` and `es`
//!
//! # Example
//!
//! ```
//! use book_data::{BookPageQuery, generate_books, generate_reviews};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
//! let books = generate_books(&BookPageQuery::new("en", 42, 0), today).expect("generated");
//! assert_eq!(books.len(), 20);
//!
//! let isbn = &books.first().expect("first book").isbn;
//! let reviews = generate_reviews(isbn, "en", 3).expect("generated");
//! assert_eq!(reviews.len(), 3);
//! ```

mod error;
mod generator;
mod isbn;
mod likes;
pub mod page_cli;
mod record;
mod region;
mod seed;

pub use error::GenerationError;
pub use generator::{MAX_REVIEWS_PER_BOOK, generate_books, generate_reviews};
pub use isbn::{ISBN_LENGTH, is_valid_isbn13};
pub use likes::{ExpectedLikes, MAX_EXPECTED_LIKES};
pub use record::{
    BookPageQuery, BookRecord, FIRST_PAGE_SIZE, PAGE_SIZE, ReviewRecord, page_size,
};
pub use region::{Region, SUPPORTED_REGIONS};
pub use seed::{book_stream_seed, review_stream_seed, stable_hash};
