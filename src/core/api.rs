//! HTTP API for the emotion detector
//!
//! Endpoints:
//! - GET  /                    - Embedded single-page form
//! - GET  /emotionDetector     - Plain-text response (textToAnalyze in query)
//! - POST /emotionDetector     - Plain-text response (textToAnalyze in form body)
//! - GET  /api/emotionDetector - JSON distribution
//! - GET  /health              - Health check

use axum::{
    extract::{Form, Query, State},
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::EmotionDetector;
use crate::types::EmotionDistribution;

/// User-facing message for the absent sentinel
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

/// Shared app state: one detector for the whole process
pub struct AppState {
    pub detector: EmotionDetector,
}

/// Request carrying the text to analyze
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    #[serde(rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState {
        detector: EmotionDetector::new(),
    });

    Router::new()
        .route("/", get(index))
        .route("/emotionDetector", get(detect_query).post(detect_form))
        .route("/api/emotionDetector", get(detect_json))
        .route("/health", get(health))
        .with_state(state)
}

/// Embedded form page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// GET variant - text in the query string
async fn detect_query(
    State(state): State<Arc<AppState>>,
    Query(req): Query<DetectRequest>,
) -> String {
    respond(&state, req)
}

/// POST variant - text in a urlencoded form body
async fn detect_form(
    State(state): State<Arc<AppState>>,
    Form(req): Form<DetectRequest>,
) -> String {
    respond(&state, req)
}

/// JSON variant - full distribution, nulls for the absent sentinel
async fn detect_json(
    State(state): State<Arc<AppState>>,
    Query(req): Query<DetectRequest>,
) -> Json<EmotionDistribution> {
    let text = req.text_to_analyze.unwrap_or_default();
    Json(state.detector.detect(&text))
}

fn respond(state: &AppState, req: DetectRequest) -> String {
    let text = req.text_to_analyze.unwrap_or_default();
    let dist = state.detector.detect(&text);
    format_response(&dist)
}

/// Render the fixed response sentence, or the invalid-text message for
/// the absent sentinel
pub fn format_response(dist: &EmotionDistribution) -> String {
    let Some(dominant) = dist.dominant_emotion else {
        return INVALID_TEXT_MESSAGE.to_string();
    };

    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, \
         'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        dist.anger.unwrap_or(0.0),
        dist.disgust.unwrap_or(0.0),
        dist.fear.unwrap_or(0.0),
        dist.joy.unwrap_or(0.0),
        dist.sadness.unwrap_or(0.0),
        dominant,
    )
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Emolens API running on {}", addr);
    println!("  GET  /                    - Web form");
    println!("  GET  /emotionDetector     - Detect (query string)");
    println!("  POST /emotionDetector     - Detect (form body)");
    println!("  GET  /api/emotionDetector - Detect (JSON)");
    println!("  GET  /health              - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Emolens - Emotion Detection</title>
  <style>
    body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; }
    textarea { width: 100%; height: 5rem; }
    #system_response { margin-top: 1rem; padding: 0.75rem; border: 1px solid #ccc; }
  </style>
</head>
<body>
  <h1>Emotion Detection</h1>
  <textarea id="textToAnalyze" placeholder="Type a short statement..."></textarea>
  <br>
  <button onclick="runDetection()">Analyze</button>
  <div id="system_response">The result will appear here.</div>
  <script>
    function runDetection() {
      const text = document.getElementById("textToAnalyze").value;
      const xhttp = new XMLHttpRequest();
      xhttp.onreadystatechange = function () {
        if (this.readyState === 4 && this.status === 200) {
          document.getElementById("system_response").innerHTML = this.responseText;
        }
      };
      xhttp.open("POST", "/emotionDetector", true);
      xhttp.setRequestHeader("Content-type", "application/x-www-form-urlencoded");
      xhttp.send("textToAnalyze=" + encodeURIComponent(text));
    }
  </script>
</body>
</html>
"#;
