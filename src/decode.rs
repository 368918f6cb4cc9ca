//! JSON decoding boundary.
//!
//! Payload bytes are first parsed into a `serde_json::Value` so the engine
//! can apply its empty-result check, then converted into the request's
//! target type. Decode failures are reported through `LoadError`, never
//! panicked past this boundary.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LoadError;

/// Generic string-keyed result used when no concrete target type is named.
pub type Mapping = serde_json::Map<String, Value>;

/// Parse raw payload bytes into a JSON value.
pub fn decode_value(bytes: &[u8]) -> Result<Value, LoadError> {
    serde_json::from_slice(bytes).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Convert a decoded value into the request's target type.
pub fn decode_into<T: DeserializeOwned>(value: Value) -> Result<T, LoadError> {
    serde_json::from_value(value).map_err(|e| LoadError::Decode(e.to_string()))
}
