//! In-process request/response data model.
//!
//! # Responsibilities
//! - Model an inbound request and outbound response in a transport-agnostic form
//! - Ordered route parameters and multi-valued header/query fields
//!
//! # Design Decisions
//! - Instances are exclusively owned by the flow that created them; nothing
//!   here holds shared state or locks
//! - Lossy empty-string accessors sit on top of `Option`-returning primitives

pub mod params;
pub mod request;
pub mod response;

pub use params::{Param, Params};
pub use request::{Method, MultiMap, RequestContext};
pub use response::{PayloadType, ResponseContext};
