//! OpenAPI schema definitions for domain and generator types.
//!
//! Neither the domain error nor the `book_data` records derive `ToSchema`;
//! these wrappers mirror their wire shape so the framework concern stays in
//! the inbound adapter.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request parameters are malformed or out of range.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected failure occurred while serving the request.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "unsupported region 'xx'; supported regions are: en, fr, de, es")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "67e55044-10b1-426f-9247-bb680e5fe0c8")]
    trace_id: Option<String>,
    /// Supplementary details such as `field` or `supportedRegions`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`book_data::BookRecord`].
#[derive(ToSchema)]
#[schema(as = book_data::BookRecord, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookRecordSchema {
    /// Global position of the book across pages.
    #[schema(example = 0)]
    index: u64,
    /// Thirteen-digit ISBN with a valid EAN-13 check digit.
    #[schema(example = "9780306406157")]
    isbn: String,
    /// Product-style title.
    #[schema(example = "Rustic Granite Chair")]
    title: String,
    /// Author names; always exactly one.
    authors: Vec<String>,
    /// Publisher company name.
    #[schema(example = "Hettinger LLC")]
    publisher: String,
    /// Stochastically rounded like count.
    #[schema(example = 3)]
    likes: u32,
    /// Review count echoed from the request.
    #[schema(example = 0)]
    review_count: u32,
    /// Publication date within the last ten years.
    #[schema(example = "2021-05-14", format = Date)]
    published_date: String,
}

/// OpenAPI schema for [`book_data::ReviewRecord`].
#[derive(ToSchema)]
#[schema(as = book_data::ReviewRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewRecordSchema {
    /// Reviewer full name.
    #[schema(example = "Ada Lovelace")]
    user: String,
    /// Review template followed by a filler sentence.
    #[schema(example = "Great book! Highly recommended. Sed ut perspiciatis unde omnis.")]
    text: String,
}
