//! Integration tests for the Gemini client (wiremock-based)
#![allow(clippy::unwrap_used)]

use integration_gemini::{GeminiClient, GeminiConfig, GeminiError};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash-lite:generateContent";

#[tokio::test]
async fn returns_first_candidate_text_verbatim() {
    let server = MockServer::start().await;

    let body = r#"{
        "candidates": [{
            "content": {
                "parts": [{"text": "Sotteok sotteok\nA skewer of rice cake and sausage."}]
            }
        }]
    }"#;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"parts": [{"text": "Anseong Rest Area menu"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&GeminiConfig::for_testing(&server.uri())).unwrap();
    let text = client.generate("Anseong Rest Area menu").await.unwrap();

    assert_eq!(text, "Sotteok sotteok\nA skewer of rice cake and sausage.");
}

#[tokio::test]
async fn missing_candidates_surfaces_provider_message() {
    let server = MockServer::start().await;

    let body = r#"{"error": {"message": "API key not valid. Please pass a valid API key.", "code": 400}}"#;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string(body))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&GeminiConfig::for_testing(&server.uri())).unwrap();
    let err = client.generate("anything").await.unwrap_err();

    assert!(
        matches!(err, GeminiError::NoCandidates { provider_message: Some(ref m) }
            if m.contains("API key not valid"))
    );
}

#[tokio::test]
async fn missing_candidates_without_message_is_generic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&GeminiConfig::for_testing(&server.uri())).unwrap();
    let err = client.generate("anything").await.unwrap_err();

    assert!(matches!(
        err,
        GeminiError::NoCandidates {
            provider_message: None
        }
    ));
    assert_eq!(err.to_string(), "Provider returned no candidates");
}

#[tokio::test]
async fn http_error_without_json_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&GeminiConfig::for_testing(&server.uri())).unwrap();
    let err = client.generate("anything").await.unwrap_err();

    assert!(matches!(err, GeminiError::ParseError(_)));
}
