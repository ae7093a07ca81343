//! Shared application state for the web server.
//!
//! The system is stateless by design: no database, no files, no caches.
//! State carries only the loaded configuration.

use std::sync::Arc;

use crate::config::Config;

/// Shared state injected into every Axum handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

pub type SharedState = Arc<AppState>;
