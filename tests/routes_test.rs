//! Tests for the route table and rejection recovery

mod common;

use common::{test_app, MockUpstream};
use faq_bot::models::{AnalyticsResponse, AskResponse, ErrorResponse};
use faq_bot::routes::{configure_routes, MAX_BODY_BYTES};
use warp::http::StatusCode;

fn detail(body: &[u8]) -> String {
    let error: ErrorResponse = serde_json::from_slice(body).expect("error body has detail");
    error.detail
}

#[tokio::test]
async fn test_post_ask_returns_answer() {
    let app = test_app(MockUpstream::answering("Forty-two."));
    let routes = configure_routes(app.state.clone());

    let response = warp::test::request()
        .method("POST")
        .path("/ask")
        .json(&serde_json::json!({"question": "What is the answer?"}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(value["question"], "What is the answer?");
    assert_eq!(value["answer"], "Forty-two.");

    let timestamp = value["timestamp"].as_str().unwrap();
    let fraction = timestamp.split('.').nth(1);
    assert!(fraction.map_or(true, |f| f.len() == 6), "timestamp {}", timestamp);

    let body: AskResponse = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body.answer, "Forty-two.");
    assert_eq!(app.state.store.count().unwrap(), 1);
}

#[tokio::test]
async fn test_get_analytics_returns_summary() {
    let app = test_app(MockUpstream::answering("yes"));
    app.state.store.insert("Is Rust fast?", "yes").unwrap();
    app.state.store.insert("Is Rust safe?", "yes").unwrap();
    let routes = configure_routes(app.state.clone());

    let response = warp::test::request()
        .method("GET")
        .path("/analytics")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(value["total_queries"], 2);
    assert_eq!(value["last_5_questions"][0]["question"], "Is Rust safe?");
    assert!(value["last_5_questions"][0].get("created_at").is_some());
    assert_eq!(value["top_3_words"][0]["word"], "is");
    assert_eq!(value["top_3_words"][0]["count"], 2);

    let summary: AnalyticsResponse = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(summary.last_5_questions.len(), 2);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = test_app(MockUpstream::answering("a"));
    let routes = configure_routes(app.state.clone());

    let response = warp::test::request()
        .method("GET")
        .path("/questions")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail(response.body()), "Not Found");
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let app = test_app(MockUpstream::answering("a"));
    let routes = configure_routes(app.state.clone());

    let get_ask = warp::test::request()
        .method("GET")
        .path("/ask")
        .reply(&routes)
        .await;
    assert_eq!(get_ask.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(detail(get_ask.body()), "Method Not Allowed");

    let post_analytics = warp::test::request()
        .method("POST")
        .path("/analytics")
        .json(&serde_json::json!({}))
        .reply(&routes)
        .await;
    assert_eq!(post_analytics.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(detail(post_analytics.body()), "Method Not Allowed");

    assert_eq!(app.upstream.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_422() {
    let app = test_app(MockUpstream::answering("a"));
    let routes = configure_routes(app.state.clone());

    let response = warp::test::request()
        .method("POST")
        .path("/ask")
        .header("content-type", "application/json")
        .body("not json")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(detail(response.body()).starts_with("Invalid request body"));
    assert_eq!(app.upstream.call_count(), 0);
}

#[tokio::test]
async fn test_missing_question_is_422() {
    let app = test_app(MockUpstream::answering("a"));
    let routes = configure_routes(app.state.clone());

    let response = warp::test::request()
        .method("POST")
        .path("/ask")
        .json(&serde_json::json!({"text": "wrong field"}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(detail(response.body()).contains("question"));
    assert_eq!(app.upstream.call_count(), 0);
}

#[tokio::test]
async fn test_blank_question_is_422() {
    let app = test_app(MockUpstream::answering("a"));
    let routes = configure_routes(app.state.clone());

    let response = warp::test::request()
        .method("POST")
        .path("/ask")
        .json(&serde_json::json!({"question": "  "}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(detail(response.body()), "question must not be empty");
}

#[tokio::test]
async fn test_oversized_body_is_413() {
    let app = test_app(MockUpstream::answering("a"));
    let routes = configure_routes(app.state.clone());

    let question = "x".repeat(MAX_BODY_BYTES as usize + 1);
    let response = warp::test::request()
        .method("POST")
        .path("/ask")
        .json(&serde_json::json!({ "question": question }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(detail(response.body()), "Payload Too Large");
    assert_eq!(app.upstream.call_count(), 0);
}

#[tokio::test]
async fn test_upstream_rejection_status_passes_through_route() {
    let app = test_app(MockUpstream::new(vec![common::Simulated::Http(
        reqwest::StatusCode::TOO_MANY_REQUESTS,
        r#"{"error":{"message":"rate limited"}}"#.to_string(),
    )]));
    let routes = configure_routes(app.state.clone());

    let response = warp::test::request()
        .method("POST")
        .path("/ask")
        .json(&serde_json::json!({"question": "Hi?"}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(detail(response.body()), "API Error: rate limited");
}
