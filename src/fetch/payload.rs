//! Fetched content typed by expected format.

use serde_json::Value;

/// The shape a fetched body is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// Body decoded as text.
    Text,
    /// Body parsed as a JSON document.
    Json,
    /// Body kept as raw bytes.
    Bytes,
}

/// A successfully fetched dataset body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Json(Value),
    Bytes(Vec<u8>),
}

impl Payload {
    /// Returns the format this payload was decoded as.
    #[must_use]
    pub fn format(&self) -> PayloadFormat {
        match self {
            Self::Text(_) => PayloadFormat::Text,
            Self::Json(_) => PayloadFormat::Json,
            Self::Bytes(_) => PayloadFormat::Bytes,
        }
    }
}
