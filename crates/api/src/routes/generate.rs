//! Code generation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use copilot::{GenerationRequest, GenerationView};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::routes::Envelope;
use crate::state::AppState;

/// Body of `POST /api/generate`.
///
/// Every field is optional here so that missing fields surface as
/// validation messages rather than deserialization failures.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Integer or integer string; `null` counts as absent.
    #[serde(default)]
    pub user_id: Option<Value>,
}

impl From<GenerateBody> for GenerationRequest {
    fn from(body: GenerateBody) -> Self {
        let user_id = match body.user_id {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => Some(raw),
            Some(Value::Number(number)) => Some(integral_text(&number)),
            Some(other) => Some(other.to_string()),
        };

        GenerationRequest {
            prompt: body.prompt.unwrap_or_default(),
            language: body.language.unwrap_or_default(),
            user_id,
        }
    }
}

/// Integer text for a JSON number; `1.0` counts as `1`.
fn integral_text(number: &serde_json::Number) -> String {
    if let Some(id) = number.as_i64() {
        return id.to_string();
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 => {
            (value as i64).to_string()
        }
        _ => number.to_string(),
    }
}

/// Generate code and store it.
pub async fn generate(
    State(state): State<AppState>,
    body: std::result::Result<Json<GenerateBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<GenerationView>>)> {
    let Json(body) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let view = state.generations.create(&body.into()).await?;
    Ok((StatusCode::CREATED, Json(Envelope::ok(view))))
}
