//! Shared fixtures for integration tests.

use restwire::{Method, RequestContext};

/// Install a test subscriber so codec debug events show up under
/// `RUST_LOG=restwire=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restwire=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// A request context exercising every field: repeated headers, duplicate
/// params, multi-valued queries and a non-empty body.
#[allow(dead_code)]
pub fn sample_request() -> RequestContext {
    RequestContext {
        index: 42,
        method: Method::Post,
        headers: [
            ("Accept", "text/html"),
            ("Accept", "application/json"),
            ("X-Request-Id", "abc-123"),
        ]
        .into_iter()
        .collect(),
        params: [("id", "42"), ("id", "99"), ("page", "1")]
            .into_iter()
            .collect(),
        queries: [("tag", "a"), ("tag", "b"), ("sort", "asc")]
            .into_iter()
            .collect(),
        body: bytes::Bytes::from_static(br#"{"name":"alice"}"#),
        remote: "192.168.1.10:55000".to_string(),
    }
}
