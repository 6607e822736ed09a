//! Error types for the book-data crate.
//!
//! Generation is a pure function of its inputs, so every error here describes
//! an input that cannot be turned into a stream of records. Nothing is retried:
//! the same inputs always fail the same way.

use thiserror::Error;

/// Errors that can occur when generating book pages or reviews.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The requested region code has no locale table.
    #[error("unsupported region '{code}'; supported regions are: {}", .supported.join(", "))]
    UnsupportedRegion {
        /// The region code that was rejected.
        code: String,
        /// Region codes accepted by the generator, in canonical order.
        supported: Vec<&'static str>,
    },

    /// The expected likes value cannot be stochastically rounded.
    #[error("expected likes must be a finite value between 0 and {max}, got {value}")]
    InvalidExpectedLikes {
        /// The rejected value.
        value: f64,
        /// Largest accepted value.
        max: f64,
    },

    /// More reviews were requested than a single book may carry.
    #[error("review count {count} exceeds the maximum of {max}")]
    InvalidReviewCount {
        /// The rejected review count.
        count: u32,
        /// Largest accepted review count.
        max: u32,
    },

    /// Reviews were requested for an empty ISBN.
    #[error("isbn must not be empty")]
    EmptyIsbn,
}

impl GenerationError {
    /// Returns `true` when the error is the locale gate rejecting a region.
    ///
    /// Callers surface this case as a validation failure; every other variant
    /// indicates a range the caller should have rejected before generating.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::{GenerationError, Region};
    ///
    /// let err = "xx".parse::<Region>().expect_err("unsupported");
    /// assert!(err.is_unsupported_region());
    /// assert!(!GenerationError::EmptyIsbn.is_unsupported_region());
    /// ```
    #[must_use]
    pub const fn is_unsupported_region(&self) -> bool {
        matches!(self, Self::UnsupportedRegion { .. })
    }
}
