//! JSON codec helpers.
//!
//! All response decoding funnels through [`decode`] so shape mismatches map
//! to [`Error::Decode`] uniformly. Decoding is permissive about unknown
//! fields (forward compatibility) and treats server `null` and absent fields
//! identically for `Option` targets, but never coerces type mismatches.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::Error;

/// Encode a request value to raw JSON.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Value, Error> {
    serde_json::to_value(value).map_err(|e| Error::decode(format!("Failed to serialize: {}", e)))
}

/// Decode raw JSON into a typed value.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| Error::decode(e.to_string()))
}
