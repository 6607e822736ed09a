//! HTTP inbound adapter exposing the catalogue REST endpoints.

pub mod books;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
mod validation;

pub use error::ApiResult;
