//! Index and health check endpoints.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub languages: &'static str,
    pub generate: &'static str,
    pub history: &'static str,
}

#[derive(Serialize)]
pub struct Index {
    pub success: bool,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// API index listing the available endpoints.
pub async fn index() -> Json<Index> {
    Json(Index {
        success: true,
        message: "Code Generation Copilot API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "GET /api/health",
            languages: "GET /api/languages",
            generate: "POST /api/generate",
            history: "GET /api/history",
        },
    })
}

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health {
        success: true,
        message: "API is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
