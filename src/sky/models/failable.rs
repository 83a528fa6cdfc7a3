//! Best-effort decoding of node lists.
//!
//! The catalogue service occasionally emits entries that match no known
//! shape. Every child list is decoded element by element and the elements
//! that fail are dropped, so one bad entry never costs the whole payload.

use serde_json::Value;

use super::{lenient::kind_of, Decode, DecodeError};

/// Decodes each element independently and keeps the ones that succeed, in
/// their original relative order.
pub fn decode_lossy<T: Decode>(values: &[Value]) -> Vec<T> {
    values.iter().filter_map(|value| T::decode(value).ok()).collect()
}

/// Like [`decode_lossy`] for a value that must itself be an array. Only a
/// non-array input fails.
pub fn decode_lossy_value<T: Decode>(value: &Value) -> Result<Vec<T>, DecodeError> {
    match value {
        Value::Array(values) => Ok(decode_lossy(values)),
        other => Err(DecodeError::MalformedPayload(format!(
            "expected an array, found {}",
            kind_of(other)
        ))),
    }
}

/// Decodes each element independently without compacting: the result has
/// one slot per input element, `None` where decoding failed.
pub fn decode_aligned<T: Decode>(values: &[Value]) -> Vec<Option<T>> {
    values.iter().map(|value| T::decode(value).ok()).collect()
}
