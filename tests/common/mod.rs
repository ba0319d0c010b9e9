//! Shared test utilities for integration tests.
//!
//! Provides a `TestClient` that drives the full router in memory. The
//! client keeps one application instance, so the session store persists
//! across requests within a test.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use budgeteer::config::Config;
use budgeteer::server::build_app;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// The fixed header row every export must carry.
pub const CSV_HEADER: &str = ",date,description,amount,type,account_number,currency";

const MULTIPART_BOUNDARY: &str = "budgeteer-test-boundary";

pub struct TestClient {
    app: Router,
}

impl TestClient {
    pub fn new() -> Self {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 7272,
        };
        let (_state, app) = build_app(config);
        Self { app }
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// Get JSON from an endpoint and parse it.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        uri: &str,
    ) -> (StatusCode, Option<T>) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_str(&body).ok();
        (status, parsed)
    }

    /// POST multipart form fields and return status and body.
    pub async fn post_multipart(&self, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, String) {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));

        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// PUT a JSON body and return status and body.
    pub async fn put_json(&self, uri: &str, body: &Value) -> (StatusCode, String) {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    /// Upload a CSV with category spending and return the session UUID.
    pub async fn upload(&self, csv: &str, category_spending: &Value) -> String {
        let spending_json = category_spending.to_string();
        let (status, body) = self
            .post_multipart(
                "/api/post-data",
                &[("csv", csv), ("categorySpending", &spending_json)],
            )
            .await;
        assert_eq!(status, StatusCode::OK, "upload failed: {body}");

        let parsed: Value = serde_json::from_str(&body).unwrap();
        parsed["uuid"].as_str().unwrap().to_string()
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
