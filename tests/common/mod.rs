#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{Method, Request},
    response::Response,
    Router,
};
use axum_envelope::{Config, HttpExchange};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a POST exchange carrying `body`, without going through a router.
pub fn exchange(body: &str) -> HttpExchange {
    exchange_with_config(body, Config::default())
}

pub fn exchange_with_config(body: &str, config: Config) -> HttpExchange {
    let (parts, ()) = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-type", "application/json")
        .body(())
        .unwrap()
        .into_parts();

    HttpExchange::new(parts, Bytes::from(body.to_string()), config)
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}
