//! Transport-agnostic request/response contexts with a protobuf wire codec.
//!
//! # Data Flow
//! ```text
//! external router                                remote handler
//!       │ builds                                       ▲
//!       ▼                                              │ transport (external)
//! RequestContext ──── wire::encode ────▶ pb::Request ──┘
//!                                                      ┌─ transport (external)
//! ResponseContext ◀─── wire::decode ──── pb::Response ◀┘
//! ```
//!
//! The crate models an inbound request and an outbound response in a
//! framework-neutral form and converts that form losslessly to and from the
//! protobuf schema in `proto/restwire.proto`, so request handling can be
//! dispatched across a process boundary. The router that produces the ordered
//! parameter list and the transport that moves wire messages both stay
//! outside this crate.

// Data model
pub mod context;

// Wire schema and codec
pub mod wire;

// Framework seam
pub mod http;

pub use context::{Method, MultiMap, Param, Params, PayloadType, RequestContext, ResponseContext};
pub use wire::{decode, decode_strict, encode, encode_strict, CodecError};
