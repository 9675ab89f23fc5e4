//! Routes exercised without a reachable database.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;

use common::{get, offline_state, post_json, post_raw, send};

#[tokio::test]
async fn test_home_is_plain_text() {
    let response = get(offline_state(), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Online"));
    let content_type = response.headers[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn test_save_without_game_is_rejected() {
    let response = post_json(
        offline_state(),
        "/api/torneio",
        &json!({ "dados": { "o1-t1-n": "Alpha" } }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "erro": "Dados inválidos" }));
}

#[tokio::test]
async fn test_save_with_blank_game_is_rejected() {
    let response = post_json(
        offline_state(),
        "/api/torneio",
        &json!({ "jogo_id": "  ", "dados": { "o1-t1-n": "Alpha" } }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_without_data_is_rejected() {
    for body in [
        json!({ "jogo_id": "val" }),
        json!({ "jogo_id": "val", "dados": {} }),
        json!({ "jogo_id": "val", "dados": null }),
        json!({ "jogo_id": "val", "dados": "o1-t1-n=Alpha" }),
    ] {
        let response = post_json(offline_state(), "/api/torneio", &body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.json()["erro"], "Dados inválidos");
    }
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = post_raw(offline_state(), "/api/torneio", "{not json".to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "erro": "Dados inválidos" }));
}

#[tokio::test]
async fn test_invalid_score_is_rejected_before_any_write() {
    let response = post_json(
        offline_state(),
        "/api/torneio",
        &json!({ "jogo_id": "val", "dados": { "o1-t1-n": "Alpha", "o1-t1-s": "two" } }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.json()["erro"].as_str().unwrap().to_string();
    assert!(message.contains("o1-t1-s"), "unexpected message: {message}");
}

#[tokio::test]
async fn test_database_failure_is_reported_as_500() {
    let response = get(offline_state(), "/api/torneio/val").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json()["erro"].is_string());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/torneio")
        .header(header::ORIGIN, "https://brackets.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = send(offline_state(), preflight).await;

    assert!(response.status.is_success());
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let simple = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, "http://localhost:5500")
        .body(Body::empty())
        .unwrap();
    let response = send(offline_state(), simple).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
