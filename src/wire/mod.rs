//! Wire schema and codec.
//!
//! The schema is an external contract, defined in `proto/restwire.proto` and
//! consumed here as generated types. `pb.rs` is the `prost-build` output,
//! vendored so builds do not need a protoc toolchain; regenerate it after any
//! change to the proto file.

pub mod codec;
pub mod pb;

pub use codec::{decode, decode_strict, encode, encode_strict, CodecError};
