//! Conversions between the in-process contexts and the wire schema.
//!
//! # Responsibilities
//! - Encode a [`RequestContext`] into a wire [`pb::Request`]
//! - Decode a wire [`pb::Response`] into a [`ResponseContext`]
//! - Keep parameter order and per-key value order intact across the boundary
//!
//! # Design Decisions
//! - Both directions are total, single-pass and stateless: unrecognized enum
//!   values collapse to the schema's unspecified member / `Unknown` and are
//!   logged at debug level rather than surfaced as errors
//! - The strict variants turn those collapses into [`CodecError`] for callers
//!   that want protocol drift to fail loudly

use thiserror::Error;

use crate::context::{Method, PayloadType, RequestContext, ResponseContext};
use crate::wire::pb;

/// Errors surfaced by the strict codec variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The request method has no wire representation.
    #[error("method {0} has no wire representation")]
    UnmappedMethod(Method),

    /// The wire payload type is unspecified or outside the known vocabulary.
    #[error("wire payload type {0} is not in the response vocabulary")]
    UnmappedPayloadType(i32),
}

/// Encode a request context into its wire form.
///
/// Total: `index`, `body` and `remote` are copied verbatim, header and query
/// value order is preserved per key, and parameter order is preserved exactly.
/// An `Unknown` method is silently mapped to the wire schema's unspecified
/// member; use [`encode_strict`] to reject it instead.
pub fn encode(ctx: &RequestContext) -> pb::Request {
    let mut req = pb::Request {
        index: ctx.index,
        body: ctx.body.clone(),
        remote: ctx.remote.clone(),
        ..Default::default()
    };
    req.set_method(method_to_wire(ctx.method));

    for (key, values) in ctx.headers.iter() {
        req.headers.insert(
            key.to_string(),
            pb::StringList {
                values: values.to_vec(),
            },
        );
    }

    for param in &ctx.params {
        req.params.push(pb::Param {
            key: param.key.clone(),
            value: param.value.clone(),
        });
    }

    for (key, values) in ctx.queries.iter() {
        req.queries.insert(
            key.to_string(),
            pb::StringList {
                values: values.to_vec(),
            },
        );
    }

    req
}

/// Encode, rejecting a method outside the wire vocabulary.
pub fn encode_strict(ctx: &RequestContext) -> Result<pb::Request, CodecError> {
    if ctx.method == Method::Unknown {
        return Err(CodecError::UnmappedMethod(ctx.method));
    }
    Ok(encode(ctx))
}

/// Decode a wire response into a response context.
///
/// Total: `code` and `payload` are copied verbatim. An unspecified or
/// out-of-range payload type collapses to [`PayloadType::Unknown`]; use
/// [`decode_strict`] to reject it instead.
pub fn decode(resp: pb::Response) -> ResponseContext {
    ResponseContext {
        code: resp.code,
        payload_type: payload_type_from_wire(resp.r#type),
        payload: resp.payload,
    }
}

/// Decode, rejecting a payload type outside the response vocabulary.
pub fn decode_strict(resp: pb::Response) -> Result<ResponseContext, CodecError> {
    match pb::PayloadType::try_from(resp.r#type) {
        Ok(pb::PayloadType::Unspecified) | Err(_) => {
            Err(CodecError::UnmappedPayloadType(resp.r#type))
        }
        Ok(_) => Ok(decode(resp)),
    }
}

fn method_to_wire(method: Method) -> pb::Method {
    match method {
        Method::Get => pb::Method::Get,
        Method::Post => pb::Method::Post,
        Method::Put => pb::Method::Put,
        Method::Delete => pb::Method::Delete,
        Method::Unknown => {
            tracing::debug!(%method, "method has no wire mapping, sending unspecified");
            pb::Method::Unspecified
        }
    }
}

fn payload_type_from_wire(raw: i32) -> PayloadType {
    match pb::PayloadType::try_from(raw) {
        Ok(pb::PayloadType::Json) => PayloadType::Json,
        Ok(pb::PayloadType::Raw) => PayloadType::Raw,
        Ok(pb::PayloadType::Xml) => PayloadType::Xml,
        // The unspecified member is a documented part of the schema, not drift.
        Ok(pb::PayloadType::Unspecified) => PayloadType::Unknown,
        Err(_) => {
            tracing::debug!(discriminant = raw, "wire payload type out of range");
            PayloadType::Unknown
        }
    }
}
