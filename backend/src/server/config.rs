//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Configure a server on `bind_addr` reading dates from the system clock.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Replace the clock that supplies the reference day for publication
    /// dates.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests to pin the reference day")
    )]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
