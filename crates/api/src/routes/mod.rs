//! Route handlers for the API.

pub mod generate;
pub mod health;
pub mod history;
pub mod languages;

use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap `data` in a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Build the router with all routes mounted under `/api`.
pub fn router() -> Router<AppState> {
    let api = Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .route("/languages", get(languages::list))
        .route("/generate", post(generate::generate))
        .route("/history", get(history::history));

    Router::new().nest("/api", api).fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
