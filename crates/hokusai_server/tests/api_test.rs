// Route-level tests against the full router, with a deterministic driver in
// place of the Gemini backend.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use hokusai_comic::ComicGenerator;
use hokusai_core::{GenerateRequest, GenerateResponse};
use hokusai_error::HokusaiResult;
use hokusai_interface::HokusaiDriver;
use hokusai_server::{AppState, router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

/// Driver that always answers with a fixed reply.
struct StaticDriver {
    text: &'static str,
}

#[async_trait]
impl HokusaiDriver for StaticDriver {
    async fn generate(&self, _req: &GenerateRequest) -> HokusaiResult<GenerateResponse> {
        Ok(GenerateResponse {
            text: self.text.to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }

    fn model_name(&self) -> &str {
        "static-model"
    }
}

const REPLY: &str = "\
PANEL 1
SCENE: A paper boat on a rain-swollen gutter.
DIALOGUE:
- Mio: \"Hold on tight!\"
NARRATION: The city shrank behind them.

PANEL 2
SCENE: The boat shoots past a storm drain.
";

fn app_with_driver() -> axum::Router {
    let generator = ComicGenerator::new(Arc::new(StaticDriver { text: REPLY }));
    router(AppState::new(Some(Arc::new(generator))))
}

fn app_without_credential() -> axum::Router {
    router(AppState::new(None))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = app_without_credential()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn config_reports_missing_credential() {
    let response = app_without_credential()
        .oneshot(Request::get("/api/config").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["api_key_configured"], false);
    assert_eq!(json["min_story_length"], 10);
    assert_eq!(json["max_panels_range"], json!([3, 15]));
}

#[tokio::test]
async fn config_reports_configured_credential() {
    let response = app_with_driver()
        .oneshot(Request::get("/api/config").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["api_key_configured"], true);
}

#[tokio::test]
async fn generate_without_credential_is_unavailable() {
    let request = post_json(
        "/api/generate",
        json!({"story": "A paper boat set sail down the gutter.", "max_panels": 5}),
    );
    let response = app_without_credential().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn generate_returns_panel_envelope() {
    let request = post_json(
        "/api/generate",
        json!({"story": "A paper boat set sail down the gutter.", "max_panels": 5}),
    );
    let response = app_with_driver().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_panels"], 2);
    assert_eq!(json["panels"][0]["panel_number"], 1);
    assert_eq!(
        json["panels"][0]["scene"],
        "A paper boat on a rain-swollen gutter."
    );
    assert_eq!(json["panels"][0]["dialogue"][0], "Mio: \"Hold on tight!\"");
    assert_eq!(json["panels"][1]["panel_number"], 2);
}

#[tokio::test]
async fn generate_defaults_missing_panel_bound() {
    let request = post_json(
        "/api/generate",
        json!({"story": "A paper boat set sail down the gutter."}),
    );
    let response = app_with_driver().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn generate_rejects_short_story() {
    let request = post_json("/api/generate", json!({"story": "hello", "max_panels": 5}));
    let response = app_with_driver().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("too short"));
}

#[tokio::test]
async fn generate_rejects_empty_story() {
    let request = post_json("/api/generate", json!({"story": "   "}));
    let response = app_with_driver().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn transcript_is_a_plain_text_attachment() {
    let request = post_json(
        "/api/transcript",
        json!({"story": "A paper boat set sail down the gutter.", "max_panels": 5}),
    );
    let response = app_with_driver().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("attachment"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("COMIC STRIP"));
    assert!(text.contains("Panel 1: [Scene: A paper boat on a rain-swollen gutter.]"));
    assert!(text.contains("Narration: The city shrank behind them."));
}
