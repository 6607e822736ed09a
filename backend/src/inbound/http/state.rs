//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable with doubles.

use std::sync::Arc;

use crate::domain::ports::BookCatalogue;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalogue port serving books and reviews.
    pub catalogue: Arc<dyn BookCatalogue>,
}

impl HttpState {
    /// Bundle the catalogue port for handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::GeneratedBookCatalogue;
    /// use backend::inbound::http::state::HttpState;
    /// use mockable::DefaultClock;
    ///
    /// let state = HttpState::new(Arc::new(GeneratedBookCatalogue::new(Arc::new(DefaultClock))));
    /// # let _ = state;
    /// ```
    pub fn new(catalogue: Arc<dyn BookCatalogue>) -> Self {
        Self { catalogue }
    }
}
