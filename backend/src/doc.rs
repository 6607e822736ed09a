//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the catalogue and health endpoints together with the
//! schema wrappers from `inbound::http::schemas`. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` prints it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    BookRecordSchema, ErrorCodeSchema, ErrorSchema, ReviewRecordSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book catalogue API",
        description = "Deterministic synthetic book pages and reviews for UI and load testing."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::list_reviews,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookRecordSchema,
        ReviewRecordSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "books", description = "Synthetic catalogue pages and reviews"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
