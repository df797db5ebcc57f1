//! Router assembly and the analysis handler.

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine as _;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::instrument;

use talkscore_core::pipeline::analyze;
use talkscore_core::types::Feedback;

use crate::error::ApiError;
use crate::media;
use crate::state::AppState;

/// JSON request body for the analysis endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AnalyzeRequest {
    /// Base64-encoded audio, optionally with a data URI prefix.
    audio_data: String,
    /// Declared media type of the audio.
    mime_type: String,
}

/// Build the service router.
///
/// `POST /api/analyze` is the single analysis operation; other methods on
/// that path and unknown paths answer with the same JSON error shape as
/// every other failure. The body limit leaves headroom over the decoded
/// audio cap for base64 expansion.
pub fn router(state: AppState) -> Router {
    let body_limit = state.max_audio_bytes / 3 * 4 + 4096;
    Router::new()
        .route(
            "/api/analyze",
            post(handle_analyze).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// `POST /api/analyze`: decode the upload, transcribe, score.
///
/// Input validation happens entirely before the provider call, so a bad
/// request never costs a transcription. Scoring runs only on a successful
/// transcription — there are no partial results.
#[instrument(skip_all, fields(mime_type = %request.mime_type))]
async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Feedback>, ApiError> {
    let encoded = media::normalize_base64(request.audio_data.trim());
    if encoded.is_empty() {
        return Err(ApiError::MissingAudio);
    }

    if !media::is_supported(&request.mime_type) {
        return Err(ApiError::UnsupportedMediaType(request.mime_type.clone()));
    }

    let audio = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| ApiError::InvalidBase64(e.to_string()))?;

    if audio.is_empty() {
        return Err(ApiError::MissingAudio);
    }
    if audio.len() > state.max_audio_bytes {
        return Err(ApiError::PayloadTooLarge {
            bytes: audio.len(),
            max: state.max_audio_bytes,
        });
    }

    let transcription = state.stt.transcribe(&audio, &request.mime_type).await?;
    Ok(Json(analyze(&transcription)))
}

/// `GET /health`: liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Same-shape JSON error for unsupported methods on known routes.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Same-shape JSON error for unknown paths.
async fn not_found() -> ApiError {
    ApiError::NotFound
}
