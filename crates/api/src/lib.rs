//! HTTP API for Code Copilot.
//!
//! Exposes the generation and history services as JSON endpoints under
//! `/api`. The binary in `main.rs` wires configuration, the store and a
//! provider together; tests build the router directly with [`router`].

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError, ProviderConfig};
pub use error::ApiError;
pub use state::AppState;

/// Router with all routes and the given state, without middleware.
pub fn router(state: AppState) -> Router {
    routes::router().with_state(state)
}

/// Router with request tracing and CORS for `cors_origin` (`*` allows any).
pub fn app(state: AppState, cors_origin: &str) -> Router {
    router(state)
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match origin {
        "*" => AllowOrigin::any(),
        origin => match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!(%origin, "Invalid CORS origin, allowing any");
                AllowOrigin::any()
            }
        },
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
