//! API route definitions.

use crate::{ComicRequest, ComicResponse, ConfigResponse, ErrorResponse};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use hokusai_comic::{ComicGenerator, DEFAULT_PANELS, MAX_PANELS, MIN_PANELS, MIN_STORY_LENGTH};
use hokusai_error::{HokusaiError, HokusaiErrorKind};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Shared state behind the API.
///
/// The generator is absent when no credential was configured at startup; the
/// server still runs so `/api/config` can report the situation, and the
/// generate endpoints answer 503.
#[derive(Clone)]
pub struct AppState {
    generator: Option<Arc<ComicGenerator>>,
}

impl AppState {
    /// Creates new API state.
    pub fn new(generator: Option<Arc<ComicGenerator>>) -> Self {
        Self { generator }
    }
}

/// Build the complete router.
///
/// - `GET /` - embedded front end
/// - `GET /api/health` - liveness check
/// - `GET /api/config` - credential status and request limits
/// - `POST /api/generate` - story to panels, JSON envelope
/// - `POST /api/transcript` - story to downloadable plain-text transcript
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/api/config", get(get_config))
        .route("/api/generate", post(generate_comic))
        .route("/api/transcript", post(download_transcript))
        .with_state(state)
}

/// Serve the embedded front end.
async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Report credential status and request limits.
async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    let response = ConfigResponse {
        api_key_configured: state.generator.is_some(),
        max_panels_range: [MIN_PANELS, MAX_PANELS],
        min_story_length: MIN_STORY_LENGTH,
    };
    (StatusCode::OK, Json(response))
}

/// Generate comic panels from a story.
async fn generate_comic(
    State(state): State<AppState>,
    Json(request): Json<ComicRequest>,
) -> Response {
    let Some(generator) = state.generator.as_ref() else {
        return missing_credential();
    };

    let bound = request.max_panels.unwrap_or(DEFAULT_PANELS);
    match generator.generate(&request.story, bound).await {
        Ok(strip) => (StatusCode::OK, Json(ComicResponse::from(strip))).into_response(),
        Err(err) => {
            warn!(error = %err, "Comic generation failed");
            failure(&err).into_response()
        }
    }
}

/// Render the comic as a downloadable plain-text transcript.
async fn download_transcript(
    State(state): State<AppState>,
    Json(request): Json<ComicRequest>,
) -> Response {
    let Some(generator) = state.generator.as_ref() else {
        return missing_credential();
    };

    let bound = request.max_panels.unwrap_or(DEFAULT_PANELS);
    match generator.generate_transcript(&request.story, bound).await {
        Ok(text) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"comic.txt\"",
                ),
            ],
            text,
        )
            .into_response(),
        Err(err) => {
            warn!(error = %err, "Transcript generation failed");
            failure(&err).into_response()
        }
    }
}

fn missing_credential() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse::new(
            "GEMINI_API_KEY is not configured; set it and restart the server",
        )),
    )
        .into_response()
}

/// Map an error to the uniform envelope and a status code.
///
/// Raw provider errors stay inside: callers see the kind message, not the
/// source-location wrapper.
fn failure(err: &HokusaiError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match err.kind() {
        HokusaiErrorKind::Validation(v) => (StatusCode::BAD_REQUEST, v.kind.to_string()),
        HokusaiErrorKind::Config(c) => (StatusCode::SERVICE_UNAVAILABLE, c.message.clone()),
        HokusaiErrorKind::Gemini(g) => (
            StatusCode::BAD_GATEWAY,
            format!("Comic generation failed: {}", g.kind),
        ),
        HokusaiErrorKind::Server(s) => (StatusCode::INTERNAL_SERVER_ERROR, s.kind.to_string()),
    };
    (status, Json(ErrorResponse::new(message)))
}
