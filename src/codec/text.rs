//! Fixed-width text fields

use crate::error::{CarlotError, Result};

/// Encode `value` into exactly `width` bytes
///
/// Longer values are cut at the last char boundary that fits; the rest of
/// the field is zero filled. Truncation is silent.
pub fn encode_text(value: &str, width: usize) -> Vec<u8> {
    let mut end = value.len().min(width);
    while !value.is_char_boundary(end) {
        end -= 1;
    }

    let mut field = Vec::with_capacity(width);
    field.extend_from_slice(&value.as_bytes()[..end]);
    field.resize(width, 0);
    field
}

/// Decode a zero-padded field
///
/// Everything before the first zero byte (or the whole buffer when there is
/// none) must be valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());

    std::str::from_utf8(&bytes[..end])
        .map(str::to_owned)
        .map_err(|e| CarlotError::Corruption(format!("Invalid UTF-8 in text field: {}", e)))
}
