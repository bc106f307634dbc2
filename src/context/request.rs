//! Inbound request model and accessors.
//!
//! # Responsibilities
//! - Hold everything a remote handler needs about one inbound request
//! - First-value accessors over the multi-valued header and query fields
//!
//! # Design Decisions
//! - Headers/queries are an explicit multi-valued association (unordered keys,
//!   ordered values per key), not a bare map-of-vec handed around by callers
//! - The context is built once by the external router and read-only afterwards
//! - `header`/`query`/`param` collapse "absent" to the empty string; the
//!   `Option`-returning primitives underneath them disambiguate

use std::collections::HashMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::params::Params;

/// Request methods this core dispatches.
///
/// Anything outside the wire vocabulary collapses to `Unknown` at parse time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    #[default]
    Unknown,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for Method {
    /// Exact uppercase match; any other verb (including the empty string)
    /// maps to `Unknown`.
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            _ => Method::Unknown,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multi-valued association for header and query fields.
///
/// Keys are unordered; values within a key keep insertion order, since HTTP
/// permits repeated headers and query keys. A present key always holds at
/// least one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiMap(HashMap<String, Vec<String>>);

impl MultiMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Append `value` under `key`, preserving per-key insertion order.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// First value under `key`, if the key is present.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys with their ordered value slices. Key order is arbitrary.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MultiMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.append(key, value);
        }
        map
    }
}

/// The in-process form of an inbound request.
///
/// Built once by the external router, read-only from then on, and consumed by
/// [`wire::encode`](crate::wire::encode) when handling is dispatched across
/// the process boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Opaque correlation identifier assigned by the caller.
    pub index: i32,
    pub method: Method,
    /// Header name -> ordered values.
    pub headers: MultiMap,
    /// Route parameters in router match order.
    pub params: Params,
    /// Query key -> ordered values.
    pub queries: MultiMap,
    /// Raw request body.
    pub body: Bytes,
    /// Originating address.
    pub remote: String,
}

impl RequestContext {
    /// First value of `key` in the headers, `""` when absent or empty.
    pub fn header(&self, key: &str) -> &str {
        self.headers.first(key).unwrap_or("")
    }

    /// First value of `key` in the queries, `""` when absent or empty.
    pub fn query(&self, key: &str) -> &str {
        self.queries.first(key).unwrap_or("")
    }

    /// Value of the first route parameter named `key`, `""` when absent.
    pub fn param(&self, key: &str) -> &str {
        self.params.by_name(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parses_exact_verbs_only() {
        assert_eq!(Method::from("GET"), Method::Get);
        assert_eq!(Method::from("POST"), Method::Post);
        assert_eq!(Method::from("PUT"), Method::Put);
        assert_eq!(Method::from("DELETE"), Method::Delete);

        assert_eq!(Method::from("PATCH"), Method::Unknown);
        assert_eq!(Method::from("get"), Method::Unknown);
        assert_eq!(Method::from(""), Method::Unknown);
    }

    #[test]
    fn multimap_keeps_per_key_value_order() {
        let mut map = MultiMap::new();
        map.append("Accept", "text/html");
        map.append("Accept", "application/json");

        assert_eq!(map.first("Accept"), Some("text/html"));
        assert_eq!(
            map.get_all("Accept").unwrap(),
            ["text/html", "application/json"]
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn header_returns_first_value() {
        let ctx = RequestContext {
            method: Method::Get,
            headers: [("Accept", "text/html"), ("Accept", "application/json")]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        assert_eq!(ctx.header("Accept"), "text/html");
    }

    #[test]
    fn accessors_collapse_absent_to_empty() {
        let ctx = RequestContext::default();

        assert_eq!(ctx.header("Accept"), "");
        assert_eq!(ctx.query("page"), "");
        assert_eq!(ctx.param("id"), "");
    }

    #[test]
    fn query_and_param_read_their_own_collections() {
        let ctx = RequestContext {
            queries: [("page", "2"), ("sort", "asc")].into_iter().collect(),
            params: [("id", "42"), ("id", "99")].into_iter().collect(),
            ..Default::default()
        };

        assert_eq!(ctx.query("page"), "2");
        assert_eq!(ctx.param("id"), "42");
    }
}
