//! Self-describing binary layout for nonces.
//!
//! ```text
//! byte 0      : content_length + i8::MIN, as a signed byte
//! byte 1..=n  : content bytes
//! ```
//!
//! Content lengths `0..=254` map onto signed header values `-128..=126`.
//! The header `0x7f` (127, i.e. length 255) is never produced and is rejected
//! on decode. This layout is shared with peers and must stay bit-exact.

use crate::error::{NonceError, Result};
use crate::MAX_LENGTH;

/// Offset added to the content length to form the header byte.
pub const LENGTH_OFFSET: i8 = i8::MIN;

/// Encode a content length as the header byte.
///
/// Callers guarantee `len <= MAX_LENGTH`.
pub fn encode_length(len: usize) -> u8 {
    debug_assert!(len <= MAX_LENGTH);
    (len as i16 + LENGTH_OFFSET as i16) as i8 as u8
}

/// Decode a header byte into a content length.
pub fn decode_length(header: u8) -> Result<usize> {
    let len = (header as i8 as i16 - LENGTH_OFFSET as i16) as usize;
    if len > MAX_LENGTH {
        return Err(NonceError::InvalidBinaryHeader(header));
    }
    Ok(len)
}

/// Locate the content of a binary nonce starting at `offset`.
///
/// Returns the content slice without copying.
pub fn content_at(buf: &[u8], offset: usize) -> Result<&[u8]> {
    let truncated = |needed: Option<usize>| NonceError::Truncated {
        needed: needed.unwrap_or(usize::MAX),
        available: buf.len(),
    };
    let header = *buf
        .get(offset)
        .ok_or_else(|| truncated(offset.checked_add(1)))?;
    let len = decode_length(header)?;
    let start = offset + 1;
    let end = start
        .checked_add(len)
        .filter(|&end| end <= buf.len())
        .ok_or_else(|| truncated(start.checked_add(len)))?;
    Ok(&buf[start..end])
}

/// Write `content` in binary form at `offset`, returning the bytes written.
pub fn write_at(content: &[u8], buf: &mut [u8], offset: usize) -> Result<usize> {
    let written = content.len() + 1;
    let end = offset
        .checked_add(written)
        .filter(|&end| end <= buf.len())
        .ok_or(NonceError::Truncated {
            needed: offset.saturating_add(written),
            available: buf.len(),
        })?;
    buf[offset] = encode_length(content.len());
    buf[offset + 1..end].copy_from_slice(content);
    Ok(written)
}
