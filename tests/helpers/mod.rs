#![allow(dead_code)]

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use nasa_explorer::build_app;
use nasa_explorer::config::AppConfig;
use tower::ServiceExt;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-key";

pub struct TestApp {
    pub router: Router,
    pub upstream: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;
        let config = AppConfig {
            nasa_api_key: TEST_KEY.to_string(),
            nasa_api_url: upstream.uri(),
            ..AppConfig::default()
        };
        let router = build_app(&config).expect("app builds");
        Self { router, upstream }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Bytes) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body)
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    pub async fn get_html(&self, uri: &str) -> (StatusCode, String) {
        let (status, body) = self.get(uri).await;
        (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }
}
