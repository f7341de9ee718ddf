//! Integration tests for the HTTP API
//!
//! Uses tower's oneshot to drive the router without binding a socket.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use emolens::core::{create_router, INVALID_TEXT_MESSAGE};
use serde_json::Value;
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_index_serves_form() {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("textToAnalyze"));
}

#[tokio::test]
async fn test_detect_get_happy_text() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/emotionDetector?textToAnalyze=I%20am%20very%20happy%20today%21")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(
        body.contains("The dominant emotion is joy."),
        "Unexpected body: {}",
        body
    );
    assert!(body.starts_with("For the given statement, the system response is 'anger':"));
}

#[tokio::test]
async fn test_detect_post_form() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/emotionDetector")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("textToAnalyze=I%20am%20infuriated%20about%20the%20situation."))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(
        body.contains("The dominant emotion is anger."),
        "Unexpected body: {}",
        body
    );
}

#[tokio::test]
async fn test_invalid_text_message_for_empty_input() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/emotionDetector")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("textToAnalyze="))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, INVALID_TEXT_MESSAGE);
}

#[tokio::test]
async fn test_invalid_text_message_for_neutral_input() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/emotionDetector?textToAnalyze=The%20meeting%20starts%20at%20three.")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_string(response).await, INVALID_TEXT_MESSAGE);
}

#[tokio::test]
async fn test_json_endpoint_distribution() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/emotionDetector?textToAnalyze=I%20am%20very%20happy%20today%21")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_string(response).await).unwrap();

    assert_eq!(json["dominant_emotion"], "joy");
    let sum: f64 = ["anger", "disgust", "fear", "joy", "sadness"]
        .iter()
        .map(|k| json[k].as_f64().unwrap())
        .sum();
    assert!((sum - 1.0).abs() < 1e-9, "Sum should be 1, got {}", sum);
}

#[tokio::test]
async fn test_json_endpoint_absent_sentinel() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/emotionDetector")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_string(response).await).unwrap();

    for key in ["anger", "disgust", "fear", "joy", "sadness", "dominant_emotion"] {
        assert!(json[key].is_null(), "{} should be null", key);
    }
}
