//! Tag list codec
//!
//! Ordered string lists (duplicates and empty strings allowed) encoded with
//! bitcode: lengths are packed ahead of the string bytes, so no schema
//! beyond "list of strings" is needed. This format is independent of the
//! fixed-width picture/animation layouts and only promises to round-trip
//! with itself.

use crate::error::DecodeError;

/// Encode a tag list. Infallible for in-memory input.
pub fn encode_tags(tags: &[String]) -> Vec<u8> {
    bitcode::encode(tags)
}

/// Decode a tag list produced by [`encode_tags`]
pub fn decode_tags(bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
    bitcode::decode(bytes).map_err(|e| DecodeError::malformed("tags", e.to_string()))
}
