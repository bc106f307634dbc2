//! Outbound response model.

use bytes::Bytes;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Payload encoding tag carried alongside the response bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayloadType {
    Json,
    Raw,
    Xml,
    #[default]
    Unknown,
}

impl PayloadType {
    /// String tag of this encoding. `Unknown` has no tag and yields `""`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadType::Json => "JSON",
            PayloadType::Raw => "RAW",
            PayloadType::Xml => "XML",
            PayloadType::Unknown => "",
        }
    }

    /// MIME type for the known tags.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            PayloadType::Json => Some("application/json"),
            PayloadType::Raw => Some("application/octet-stream"),
            PayloadType::Xml => Some("text/xml"),
            PayloadType::Unknown => None,
        }
    }
}

impl std::fmt::Display for PayloadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The in-process form of an outbound response.
///
/// Produced fresh by [`wire::decode`](crate::wire::decode) from a wire
/// message and owned by the caller that requested decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseContext {
    /// Status code as carried on the wire.
    pub code: i32,
    pub payload_type: PayloadType,
    /// Raw payload bytes.
    pub payload: Bytes,
}

impl ResponseContext {
    pub fn new(code: i32, payload_type: PayloadType, payload: impl Into<Bytes>) -> Self {
        Self {
            code,
            payload_type,
            payload: payload.into(),
        }
    }

    /// Deserialize the payload as JSON.
    ///
    /// Parses the payload bytes as-is; callers are expected to check
    /// `payload_type` first.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}
