//! Generation history endpoint.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use copilot::{HistoryPage, HistoryQuery};
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::routes::Envelope;
use crate::state::AppState;

/// Query string of `GET /api/history`, kept as raw text for validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub language: Option<String>,
    pub user_id: Option<String>,
}

impl From<HistoryParams> for HistoryQuery {
    fn from(params: HistoryParams) -> Self {
        HistoryQuery {
            page: params.page,
            limit: params.limit,
            language: params.language,
            user_id: params.user_id,
        }
    }
}

/// One page of stored generations, newest first.
pub async fn history(
    State(state): State<AppState>,
    params: std::result::Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<Envelope<HistoryPage>>> {
    let Query(params) = params.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;

    let page = state.history.list(&params.into()).await?;
    Ok(Json(Envelope::ok(page)))
}
