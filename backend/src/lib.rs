//! HTTP service exposing the deterministic book catalogue generator.
//!
//! The crate is split along hexagonal lines: [`domain`] owns the error
//! payload, trace identifier and catalogue port; [`inbound::http`] holds the
//! Actix handlers; [`middleware`] provides request tracing. The binary in
//! `main.rs` wires them into a server configured through [`settings`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
