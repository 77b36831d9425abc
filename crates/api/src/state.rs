//! Application state shared across handlers.

use std::sync::Arc;

use copilot::{GenerationService, HistoryService};
use database::Database;
use provider_core::CodeProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Creates generations.
    pub generations: GenerationService,
    /// Reads history.
    pub history: HistoryService,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, provider: Arc<dyn CodeProvider>) -> Self {
        Self {
            generations: GenerationService::new(db.clone(), provider),
            history: HistoryService::new(db.clone()),
            db,
        }
    }
}
