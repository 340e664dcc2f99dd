//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use couponhub_api::{AppState, build_app};
use couponhub_auth::PasswordHasher;
use couponhub_core::config::AppConfig;
use couponhub_database::{CouponStore, connect_store};

/// Admin credentials configured for every test app
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "s3cret-admin";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router for direct assertions
    pub store: Arc<dyn CouponStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application over a seeded memory store
    ///
    /// Forwarding headers are trusted so tests can pick the client address.
    pub async fn new() -> Self {
        Self::with_config(|config| config.identity.trust_forwarded_headers = true).await
    }

    /// Create a test application after adjusting the default config
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::default();
        config.auth.username = ADMIN_USER.to_string();
        config.auth.password_hash = PasswordHasher::new()
            .hash_password(ADMIN_PASSWORD)
            .expect("Failed to hash admin password");
        config.auth.jwt_secret = "integration-secret".to_string();
        adjust(&mut config);

        let store = connect_store(&config)
            .await
            .expect("Failed to connect memory store");
        let state = AppState::new(config.clone(), Arc::clone(&store))
            .expect("Failed to build application state");

        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    /// Login and return the admin bearer token
    pub async fn login(&self) -> String {
        let body = serde_json::json!({
            "username": ADMIN_USER,
            "password": ADMIN_PASSWORD,
        });

        let response = self
            .request("POST", "/api/admin/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Claim a coupon as the given address and fingerprint
    pub async fn claim(&self, ip: &str, fingerprint: &str) -> TestResponse {
        let body = serde_json::json!({ "fingerprint": fingerprint });
        self.send(
            Request::builder()
                .method("POST")
                .uri("/api/claims")
                .header("Content-Type", "application/json")
                .header("X-Forwarded-For", ip),
            Some(body),
        )
        .await
    }

    /// Claim a coupon over a connection from `peer` carrying `forwarded_for`
    pub async fn claim_from_peer(
        &self,
        peer: SocketAddr,
        forwarded_for: &str,
        fingerprint: &str,
    ) -> TestResponse {
        let body = serde_json::json!({ "fingerprint": fingerprint });
        let mut req = Request::builder()
            .method("POST")
            .uri("/api/claims")
            .header("Content-Type", "application/json")
            .header("X-Forwarded-For", forwarded_for)
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        req.extensions_mut().insert(ConnectInfo(peer));

        self.dispatch(req).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        self.send(req, body).await
    }

    async fn send(&self, req: axum::http::request::Builder, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.dispatch(req).await
    }

    async fn dispatch(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
