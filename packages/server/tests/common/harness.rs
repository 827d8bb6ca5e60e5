//! Test harness over in-memory worksheets.
//!
//! Each test gets fresh worksheets and a router wired to them, so tests can
//! drive the HTTP surface and inspect the stored rows afterwards.

use approval_core::kernel::{ServerDeps, TestDependencies};
use approval_core::server::build_app;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let page = ctx.get("/backoffice").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// In-memory worksheets - inspect these for stored rows.
    pub test_deps: TestDependencies,
    pub deps: ServerDeps,
    router: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::with_dependencies(TestDependencies::new())
    }
}

impl TestHarness {
    pub fn with_dependencies(test_deps: TestDependencies) -> Self {
        // Uses try_init() to avoid panicking if already initialized.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = test_deps.into_server_deps();
        let router = build_app(deps.clone());
        Self {
            test_deps,
            deps,
            router,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// POST an urlencoded form
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
