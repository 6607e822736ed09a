//! Book catalogue endpoints.
//!
//! ```text
//! GET /api/books?region=en&seed=42&page=0&likes=0&reviews=0
//! GET /api/books/{isbn}/reviews?region=en&reviewsCount=3
//! ```
//!
//! Handlers parse and range-check the query string, then pass the exact
//! values to the [`BookCatalogue`](crate::domain::ports::BookCatalogue) port.

use actix_web::{HttpResponse, get, web};
use book_data::{BookPageQuery, ExpectedLikes, MAX_REVIEWS_PER_BOOK};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::IntoParams;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BookRecordSchema, ErrorSchema, ReviewRecordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, normalise_region, out_of_range, parse_or_default,
};

const DEFAULT_REGION: &str = "en";
const DEFAULT_SEED: i64 = 42;
const DEFAULT_REVIEWS_COUNT: u32 = 3;

const SEED: FieldName = FieldName::new("seed");
const PAGE: FieldName = FieldName::new("page");
const LIKES: FieldName = FieldName::new("likes");
const REVIEWS: FieldName = FieldName::new("reviews");
const REVIEWS_COUNT: FieldName = FieldName::new("reviewsCount");

/// Query parameters for a page of books.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BooksQuery {
    /// Region code selecting the locale (`en`, `fr`, `de`, `es`). Defaults to `en`.
    #[param(example = "en")]
    pub region: Option<String>,
    /// Base seed; any signed 64-bit integer. Defaults to 42.
    #[param(value_type = Option<i64>, example = 42)]
    pub seed: Option<String>,
    /// Zero-based page number. Page 0 holds 20 books, later pages 10.
    #[param(value_type = Option<u32>, example = 0)]
    pub page: Option<String>,
    /// Expected likes per book, between 0 and 10000. Defaults to 0.
    #[param(value_type = Option<f64>, example = 2.5)]
    pub likes: Option<String>,
    /// Review count reported on every book. Defaults to 0.
    #[param(value_type = Option<u32>, example = 0)]
    pub reviews: Option<String>,
}

impl BooksQuery {
    /// Validate the raw parameters into a generator query.
    fn into_page_query(self) -> Result<BookPageQuery, Error> {
        let region = normalise_region(self.region.as_deref(), DEFAULT_REGION);
        let seed = parse_or_default(SEED, self.seed.as_deref(), DEFAULT_SEED)?;
        let page = parse_or_default(PAGE, self.page.as_deref(), 0_u32)?;
        let likes = parse_or_default(LIKES, self.likes.as_deref(), 0.0_f64)?;
        if let Err(err) = ExpectedLikes::new(likes) {
            let raw = self.likes.as_deref().unwrap_or_default();
            return Err(out_of_range(LIKES, raw, err.to_string()));
        }
        let review_count = parse_or_default(REVIEWS, self.reviews.as_deref(), 0_u32)?;

        Ok(BookPageQuery::new(region, seed, page)
            .with_expected_likes(likes)
            .with_review_count(review_count))
    }
}

/// Query parameters for a book's reviews.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ReviewsQuery {
    /// Region code selecting names and templates. Defaults to `en`.
    #[param(example = "en")]
    pub region: Option<String>,
    /// Number of reviews, at most 100. Defaults to 3.
    #[param(value_type = Option<u32>, example = 3)]
    pub reviews_count: Option<String>,
}

impl ReviewsQuery {
    fn into_parts(self) -> Result<(String, u32), Error> {
        let region = normalise_region(self.region.as_deref(), DEFAULT_REGION);
        let count = parse_or_default(
            REVIEWS_COUNT,
            self.reviews_count.as_deref(),
            DEFAULT_REVIEWS_COUNT,
        )?;
        if count > MAX_REVIEWS_PER_BOOK {
            let raw = self.reviews_count.as_deref().unwrap_or_default();
            return Err(out_of_range(
                REVIEWS_COUNT,
                raw,
                format!("reviewsCount must be at most {MAX_REVIEWS_PER_BOOK}, got {count}"),
            ));
        }
        Ok((region, count))
    }
}

fn log_rejection(endpoint: &'static str, err: &Error) {
    warn!(
        endpoint,
        code = ?err.code(),
        message = err.message(),
        "catalogue request rejected"
    );
}

/// Generate one page of books.
#[utoipa::path(
    get,
    path = "/api/books",
    description = "Return one deterministic page of synthetic books. Identical parameters on the same UTC day return identical records.",
    params(BooksQuery),
    responses(
        (status = 200, description = "Page of books", body = [BookRecordSchema]),
        (status = 400, description = "Unsupported region or malformed parameter", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(
    state: web::Data<HttpState>,
    params: web::Query<BooksQuery>,
) -> ApiResult<HttpResponse> {
    let query = params
        .into_inner()
        .into_page_query()
        .inspect_err(|err| log_rejection("books", err))?;
    let books = state
        .catalogue
        .book_page(&query)
        .await
        .inspect_err(|err| log_rejection("books", err))?;

    info!(
        region = %query.region,
        seed = query.seed,
        page = query.page,
        count = books.len(),
        "generated book page"
    );
    Ok(HttpResponse::Ok().json(books))
}

/// Generate the reviews of one book.
#[utoipa::path(
    get,
    path = "/api/books/{isbn}/reviews",
    description = "Return deterministic reviews for a book. Reviews depend only on the ISBN, region and count, never on the seed or page the book was listed on.",
    params(
        ("isbn" = String, Path, description = "ISBN of the book", example = "9780306406157"),
        ReviewsQuery
    ),
    responses(
        (status = 200, description = "Reviews of the book", body = [ReviewRecordSchema]),
        (status = 400, description = "Unsupported region or malformed parameter", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBookReviews"
)]
#[get("/books/{isbn}/reviews")]
pub async fn list_reviews(
    state: web::Data<HttpState>,
    isbn: web::Path<String>,
    params: web::Query<ReviewsQuery>,
) -> ApiResult<HttpResponse> {
    let isbn = isbn.into_inner();
    let (region, count) = params
        .into_inner()
        .into_parts()
        .inspect_err(|err| log_rejection("reviews", err))?;
    let reviews = state
        .catalogue
        .book_reviews(&isbn, &region, count)
        .await
        .inspect_err(|err| log_rejection("reviews", err))?;

    info!(%isbn, %region, count = reviews.len(), "generated reviews");
    Ok(HttpResponse::Ok().json(reviews))
}
