//! Test harness for HTTP-level tests.
//!
//! Drives the real router in-process with `tower::ServiceExt::oneshot`; the
//! scraping backend is a `MockListingSearcher`.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use server_core::kernel::{MockListingSearcher, TestDependencies};
use server_core::server::build_app;
use server_core::DEFAULT_REQUEST_TIMEOUT_SECS;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Test harness holding a router and the mock behind it.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let response = ctx.get("/api/health").await;
///     // ... assertions
/// }
/// ```
pub struct TestHarness {
    pub app: Router,
    /// The searcher wired into `app`; inspect it for recorded calls.
    pub searcher: Arc<MockListingSearcher>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }
}

/// Status, headers and JSON body of one response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestHarness {
    /// Harness with an empty mock searcher and default options.
    pub fn new() -> Self {
        Self::with_deps(TestDependencies::new())
    }

    /// Harness with custom test dependencies.
    pub fn with_deps(deps: TestDependencies) -> Self {
        Self::with_deps_and_origins(deps, &[])
    }

    pub fn with_deps_and_origins(deps: TestDependencies, allowed_origins: &[String]) -> Self {
        let timeout = Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS);
        Self::build(deps, allowed_origins, timeout)
    }

    /// Harness whose router gives up on requests after `request_timeout`.
    pub fn with_deps_and_timeout(deps: TestDependencies, request_timeout: Duration) -> Self {
        Self::build(deps, &[], request_timeout)
    }

    fn build(deps: TestDependencies, allowed_origins: &[String], timeout: Duration) -> Self {
        let searcher = deps.listing_searcher.clone();
        let app = build_app(deps.into_deps(), allowed_origins, timeout);
        Self { app, searcher }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.post_raw(path, &body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
