//! Language listing.

use axum::extract::State;
use axum::Json;
use database::{language, Language};

use crate::error::Result;
use crate::routes::Envelope;
use crate::state::AppState;

/// All supported languages, ordered by name.
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Language>>>> {
    let languages = language::list_languages(state.db.pool()).await?;
    Ok(Json(Envelope::ok(languages)))
}
