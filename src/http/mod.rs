//! Adapters between the in-process contexts and `http` crate types.
//!
//! # Responsibilities
//! - Build a [`RequestContext`] from decomposed `http` request parts
//! - Turn a [`ResponseContext`] into an `http` response
//!
//! # Design Decisions
//! - The router in front of this crate stays external and still supplies the
//!   ordered [`Params`]; these helpers only translate the framework-neutral
//!   pieces (method, headers, query string, status, content type)
//! - Header names arrive lowercased, as normalized by the `http` crate

use bytes::Bytes;
use thiserror::Error;

use crate::context::{Method, MultiMap, Params, RequestContext, ResponseContext};

/// Errors turning a [`ResponseContext`] into an `http` response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The status code is outside the valid HTTP range.
    #[error("status code {0} is not a valid HTTP status")]
    InvalidStatus(i32),

    /// Response construction failed.
    #[error(transparent)]
    Build(#[from] http::Error),
}

/// Build a request context from decomposed `http` request parts.
///
/// `params` comes from the external router; `index` is the caller's
/// correlation identifier. Repeated header names keep their order. Non-UTF-8
/// header values have no string form in the context model and are skipped
/// (logged at debug level). Query pairs are percent-decoded in order.
pub fn request_from_parts(
    index: i32,
    parts: &http::request::Parts,
    params: Params,
    body: Bytes,
    remote: impl Into<String>,
) -> RequestContext {
    let mut headers = MultiMap::new();
    for (name, value) in parts.headers.iter() {
        match value.to_str() {
            Ok(v) => headers.append(name.as_str(), v),
            Err(_) => {
                tracing::debug!(header = %name, "skipping non-UTF-8 header value");
            }
        }
    }

    let mut queries = MultiMap::new();
    if let Some(q) = parts.uri.query() {
        for (key, value) in url::form_urlencoded::parse(q.as_bytes()) {
            queries.append(key.into_owned(), value.into_owned());
        }
    }

    RequestContext {
        index,
        method: Method::from(parts.method.as_str()),
        headers,
        params,
        queries,
        body,
        remote: remote.into(),
    }
}

/// Turn a response context into an `http` response.
///
/// The status comes from `code`, the `Content-Type` header from
/// [`PayloadType::content_type`](crate::context::PayloadType::content_type)
/// when the encoding is known, and the payload becomes the body.
pub fn response_into_http(ctx: &ResponseContext) -> Result<http::Response<Bytes>, HttpError> {
    let code = u16::try_from(ctx.code).map_err(|_| HttpError::InvalidStatus(ctx.code))?;
    let status =
        http::StatusCode::from_u16(code).map_err(|_| HttpError::InvalidStatus(ctx.code))?;

    let mut builder = http::Response::builder().status(status);
    if let Some(content_type) = ctx.payload_type.content_type() {
        builder = builder.header(http::header::CONTENT_TYPE, content_type);
    }

    Ok(builder.body(ctx.payload.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PayloadType;

    fn parts_for(uri: &str, headers: &[(&str, &str)]) -> http::request::Parts {
        let mut builder = http::Request::builder().method("GET").uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn repeated_headers_keep_their_order() {
        let parts = parts_for(
            "http://example.com/users/42",
            &[("accept", "text/html"), ("accept", "application/json")],
        );

        let ctx = request_from_parts(1, &parts, Params::new(), Bytes::new(), "10.0.0.1");
        assert_eq!(
            ctx.headers.get_all("accept").unwrap(),
            ["text/html", "application/json"]
        );
        assert_eq!(ctx.header("accept"), "text/html");
    }

    #[test]
    fn query_pairs_decoded_in_order() {
        let parts = parts_for("http://example.com/search?tag=a&tag=b&q=hello%20world", &[]);

        let ctx = request_from_parts(1, &parts, Params::new(), Bytes::new(), "10.0.0.1");
        assert_eq!(ctx.queries.get_all("tag").unwrap(), ["a", "b"]);
        assert_eq!(ctx.query("q"), "hello world");
    }

    #[test]
    fn method_and_params_carried_through() {
        let parts = parts_for("http://example.com/users/42", &[]);
        let params: Params = [("id", "42")].into_iter().collect();

        let ctx = request_from_parts(7, &parts, params, Bytes::from_static(b"body"), "peer");
        assert_eq!(ctx.index, 7);
        assert_eq!(ctx.method, Method::Get);
        assert_eq!(ctx.param("id"), "42");
        assert_eq!(ctx.body.as_ref(), b"body");
        assert_eq!(ctx.remote, "peer");
    }

    #[test]
    fn response_maps_status_and_content_type() {
        let ctx = ResponseContext::new(200, PayloadType::Json, br#"{"ok":true}"#.to_vec());

        let resp = response_into_http(&ctx).unwrap();
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(
            resp.headers()[http::header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(resp.body().as_ref(), br#"{"ok":true}"#);
    }

    #[test]
    fn unknown_payload_type_sets_no_content_type() {
        let ctx = ResponseContext::new(204, PayloadType::Unknown, Vec::new());

        let resp = response_into_http(&ctx).unwrap();
        assert!(!resp.headers().contains_key(http::header::CONTENT_TYPE));
    }

    #[test]
    fn out_of_range_status_is_an_error() {
        let ctx = ResponseContext::new(-1, PayloadType::Raw, Vec::new());
        assert!(matches!(
            response_into_http(&ctx),
            Err(HttpError::InvalidStatus(-1))
        ));

        let ctx = ResponseContext::new(42, PayloadType::Raw, Vec::new());
        assert!(matches!(
            response_into_http(&ctx),
            Err(HttpError::InvalidStatus(42))
        ));
    }
}
