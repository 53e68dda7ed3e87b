//! Integration tests for the Kakao clients (wiremock-based)
#![allow(clippy::unwrap_used)]

use domain::GeoPoint;
use integration_kakao::{KakaoConfig, KakaoError, KakaoLocalClient, KakaoNaviClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADDRESS_PATH: &str = "/v2/local/search/address.json";
const KEYWORD_PATH: &str = "/v2/local/search/keyword.json";
const DIRECTIONS_PATH: &str = "/v1/directions";

fn documents_json(x: &str, y: &str) -> String {
    format!(r#"{{"documents": [{{"x": "{x}", "y": "{y}"}}]}}"#)
}

const EMPTY_DOCUMENTS: &str = r#"{"documents": []}"#;

#[tokio::test]
async fn address_tier_wins_without_keyword_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ADDRESS_PATH))
        .and(query_param("query", "Seoul Station"))
        .respond_with(ResponseTemplate::new(200).set_body_string(documents_json("126.9706", "37.5547")))
        .mount(&server)
        .await;

    // Tier precedence: the keyword endpoint must never be consulted.
    Mock::given(method("GET"))
        .and(path(KEYWORD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_DOCUMENTS))
        .expect(0)
        .mount(&server)
        .await;

    let client = KakaoLocalClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    let point = client.resolve("Seoul Station").await.unwrap();

    assert_eq!(point, GeoPoint::new_unchecked(126.9706, 37.5547));
}

#[tokio::test]
async fn keyword_tier_answers_when_address_tier_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ADDRESS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_DOCUMENTS))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(KEYWORD_PATH))
        .and(query_param("query", "Anseong Rest Area"))
        .respond_with(ResponseTemplate::new(200).set_body_string(documents_json("127.1893", "37.0075")))
        .expect(1)
        .mount(&server)
        .await;

    let client = KakaoLocalClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    let point = client.resolve("Anseong Rest Area").await.unwrap();

    assert_eq!(point, GeoPoint::new_unchecked(127.1893, 37.0075));
}

#[tokio::test]
async fn unresolved_by_both_tiers_is_place_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ADDRESS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_DOCUMENTS))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(KEYWORD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_DOCUMENTS))
        .mount(&server)
        .await;

    let client = KakaoLocalClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    let err = client.resolve("Nowhere Station").await.unwrap_err();

    assert!(matches!(err, KakaoError::PlaceNotFound(ref q) if q == "Nowhere Station"));
}

#[tokio::test]
async fn geocoding_sends_kakao_ak_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ADDRESS_PATH))
        .and(header("Authorization", "KakaoAK test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(documents_json("127.0", "37.0")))
        .expect(1)
        .mount(&server)
        .await;

    let client = KakaoLocalClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    client.resolve("Seoul Station").await.unwrap();
}

#[tokio::test]
async fn geocoding_server_error_is_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ADDRESS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = KakaoLocalClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    let err = client.resolve("Seoul Station").await.unwrap_err();

    assert!(matches!(err, KakaoError::RequestFailed(_)));
}

#[tokio::test]
async fn route_preserves_segment_and_vertex_order() {
    let server = MockServer::start().await;

    let body = r#"{
        "routes": [{
            "sections": [{
                "roads": [
                    {"vertexes": [0.0, 0.0, 1.0, 1.0]},
                    {"vertexes": [2.0, 2.0, 3.0, 3.0]}
                ]
            }]
        }]
    }"#;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(query_param("priority", "RECOMMEND"))
        .and(query_param("origin", "126.97,37.55"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = KakaoNaviClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    let polyline = client
        .route(
            GeoPoint::new_unchecked(126.97, 37.55),
            GeoPoint::new_unchecked(129.04, 35.11),
        )
        .await
        .unwrap();

    let expected: Vec<GeoPoint> = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]
        .iter()
        .map(|&(lng, lat)| GeoPoint::new_unchecked(lng, lat))
        .collect();
    assert_eq!(polyline.points(), expected.as_slice());
}

#[tokio::test]
async fn zero_routes_is_no_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"routes": []}"#))
        .mount(&server)
        .await;

    let client = KakaoNaviClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    let err = client
        .route(
            GeoPoint::new_unchecked(126.97, 37.55),
            GeoPoint::new_unchecked(129.04, 35.11),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, KakaoError::NoRoute { .. }));
}

#[tokio::test]
async fn route_without_sections_is_no_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"routes": [{"sections": []}]}"#),
        )
        .mount(&server)
        .await;

    let client = KakaoNaviClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    let err = client
        .route(
            GeoPoint::new_unchecked(126.97, 37.55),
            GeoPoint::new_unchecked(129.04, 35.11),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, KakaoError::NoRoute { .. }));
}

#[tokio::test]
async fn section_without_roads_yields_empty_polyline() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"routes": [{"sections": [{"roads": []}]}]}"#),
        )
        .mount(&server)
        .await;

    let client = KakaoNaviClient::new(&KakaoConfig::for_testing(&server.uri())).unwrap();
    let polyline = client
        .route(
            GeoPoint::new_unchecked(126.97, 37.55),
            GeoPoint::new_unchecked(129.04, 35.11),
        )
        .await
        .unwrap();

    assert!(polyline.is_empty());
}
