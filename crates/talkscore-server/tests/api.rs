//! Router-level tests with a mocked speech-to-text provider.

#![allow(missing_docs)]

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use base64::Engine as _;
use serde_json::{Value, json};
use tower::ServiceExt;

use talkscore_core::stt::{SpeechToText, SttError};
use talkscore_core::types::{Transcription, WordTiming};
use talkscore_server::{AppState, router};

mockall::mock! {
    Stt {}

    #[async_trait::async_trait]
    impl SpeechToText for Stt {
        async fn transcribe(
            &self,
            audio: &[u8],
            media_type: &str,
        ) -> Result<Transcription, SttError>;
    }
}

const MAX_AUDIO_BYTES: usize = 50 * 1024 * 1024;

fn app(stt: MockStt) -> axum::Router {
    router(AppState::new(Arc::new(stt), MAX_AUDIO_BYTES))
}

fn analyze_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_transcription() -> Transcription {
    Transcription {
        transcript: "good morning everyone welcome back".to_string(),
        confidence: 0.95,
        words: vec![
            WordTiming::new("good", 0.0, 0.3, 0.96),
            WordTiming::new("morning", 0.4, 0.8, 0.95),
            WordTiming::new("everyone", 0.9, 1.3, 0.94),
            WordTiming::new("welcome", 1.4, 1.7, 0.95),
            WordTiming::new("back", 1.8, 2.0, 0.96),
        ],
    }
}

fn encoded_audio() -> String {
    base64::engine::general_purpose::STANDARD.encode(b"fake-audio-bytes")
}

// ── success path ─────────────────────────────────────────────────────────

#[tokio::test]
async fn analyze_returns_the_feedback_shape() {
    let mut stt = MockStt::new();
    let _ = stt
        .expect_transcribe()
        .times(1)
        .returning(|_, _| Ok(sample_transcription()));

    let response = app(stt)
        .oneshot(analyze_request(&json!({
            "audioData": encoded_audio(),
            "mimeType": "audio/wav",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    for key in ["clarity", "confidence", "fluency", "pace", "overall"] {
        assert!(body["scores"][key].is_number(), "missing score: {key}");
    }
    assert!(body["overallFeedback"].is_string());
    assert!(
        body["observation"]
            .as_str()
            .unwrap()
            .contains("good morning everyone")
    );
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn analyze_forwards_decoded_audio_and_media_type() {
    let mut stt = MockStt::new();
    let _ = stt
        .expect_transcribe()
        .withf(|audio, media_type| audio == &b"fake-audio-bytes"[..] && media_type == "audio/mpeg")
        .times(1)
        .returning(|_, _| Ok(sample_transcription()));

    let response = app(stt)
        .oneshot(analyze_request(&json!({
            "audioData": encoded_audio(),
            "mimeType": "audio/mpeg",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn analyze_accepts_a_data_uri_payload() {
    let mut stt = MockStt::new();
    let _ = stt
        .expect_transcribe()
        .times(1)
        .returning(|_, _| Ok(sample_transcription()));

    let response = app(stt)
        .oneshot(analyze_request(&json!({
            "audioData": format!("data:audio/wav;base64,{}", encoded_audio()),
            "mimeType": "audio/wav",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ── input errors: provider must never be contacted ───────────────────────

#[tokio::test]
async fn missing_audio_is_bad_request_without_a_provider_call() {
    let mut stt = MockStt::new();
    let _ = stt.expect_transcribe().never();

    let response = app(stt)
        .oneshot(analyze_request(&json!({ "mimeType": "audio/wav" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No audio data provided");
}

#[tokio::test]
async fn invalid_base64_is_bad_request() {
    let mut stt = MockStt::new();
    let _ = stt.expect_transcribe().never();

    let response = app(stt)
        .oneshot(analyze_request(&json!({
            "audioData": "!!!not-valid-base64!!!",
            "mimeType": "audio/wav",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Invalid base64 audio data")
    );
}

#[tokio::test]
async fn unsupported_media_type_is_bad_request() {
    let mut stt = MockStt::new();
    let _ = stt.expect_transcribe().never();

    let response = app(stt)
        .oneshot(analyze_request(&json!({
            "audioData": encoded_audio(),
            "mimeType": "video/mp4",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Unsupported media type")
    );
}

#[tokio::test]
async fn oversized_audio_is_bad_request() {
    let mut stt = MockStt::new();
    let _ = stt.expect_transcribe().never();

    // Tiny limit so the test payload stays small.
    let app = router(AppState::new(Arc::new(stt), 8));
    let big = base64::engine::general_purpose::STANDARD.encode(vec![0_u8; 64]);

    let response = app
        .oneshot(analyze_request(&json!({
            "audioData": big,
            "mimeType": "audio/wav",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("too large"));
}

#[tokio::test]
async fn wrong_method_is_method_not_allowed() {
    let mut stt = MockStt::new();
    let _ = stt.expect_transcribe().never();

    let response = app(stt)
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/analyze")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
}

// ── provider failures ────────────────────────────────────────────────────

#[tokio::test]
async fn provider_failure_is_bad_gateway() {
    let mut stt = MockStt::new();
    let _ = stt.expect_transcribe().times(1).returning(|_, _| {
        Err(SttError::Status {
            status: 500,
            message: "upstream exploded".to_string(),
        })
    });

    let response = app(stt)
        .oneshot(analyze_request(&json!({
            "audioData": encoded_audio(),
            "mimeType": "audio/wav",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("upstream exploded"));
    assert!(body.get("scores").is_none(), "no partial results on failure");
}

#[tokio::test]
async fn empty_provider_result_is_bad_gateway() {
    let mut stt = MockStt::new();
    let _ = stt
        .expect_transcribe()
        .times(1)
        .returning(|_, _| Err(SttError::EmptyResult));

    let response = app(stt)
        .oneshot(analyze_request(&json!({
            "audioData": encoded_audio(),
            "mimeType": "audio/wav",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn missing_credential_is_a_server_configuration_error() {
    let mut stt = MockStt::new();
    let _ = stt
        .expect_transcribe()
        .times(1)
        .returning(|_, _| Err(SttError::MissingApiKey));

    let response = app(stt)
        .oneshot(analyze_request(&json!({
            "audioData": encoded_audio(),
            "mimeType": "audio/wav",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("API key"));
}

// ── misc routes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok() {
    let response = app(MockStt::new())
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let response = app(MockStt::new())
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
}
