//! Domain types and services for the catalogue API.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic error payload.
//! - [`TraceId`]: request-scoped correlation identifier.
//! - [`ports::BookCatalogue`]: driving port used by inbound adapters.
//! - [`GeneratedBookCatalogue`]: port implementation backed by `book_data`.

mod book_catalogue_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::book_catalogue_service::GeneratedBookCatalogue;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
