//! Text form of nonces: unpadded URL-safe base64.
//!
//! Input may also use the standard alphabet (`+` and `/`) or carry `=`
//! padding; both are normalized away before decoding, so every nonce has
//! exactly one canonical text form.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{NonceError, Result};

/// Encode bytes to canonical text.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Swap the two alphabets: `+` with `-` and `/` with `_`.
///
/// Applying it twice is the identity. Use it to move text through channels
/// that reject one of the two character pairs.
pub fn swap_alphabet(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '+' => '-',
            '-' => '+',
            '/' => '_',
            '_' => '/',
            other => other,
        })
        .collect()
}

/// Normalize text to the canonical alphabet without padding.
pub fn normalize(text: &str) -> String {
    text.trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Decode text, returning the bytes and the normalized canonical text.
///
/// Non-zero trailing bits are rejected, so the returned text re-encodes the
/// returned bytes exactly.
pub fn decode(text: &str) -> Result<(Vec<u8>, String)> {
    let canonical = normalize(text);
    let bytes = URL_SAFE_NO_PAD
        .decode(canonical.as_bytes())
        .map_err(|e| NonceError::Decode(e.to_string()))?;
    Ok((bytes, canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_url_safe() {
        assert_eq!(encode(&[0xfb, 0xff]), "-_8");
    }

    #[test]
    fn test_decode_accepts_standard_alphabet() {
        let (bytes, canonical) = decode("+/8=").unwrap();
        assert_eq!(bytes, vec![0xfb, 0xff]);
        assert_eq!(canonical, "-_8");
    }

    #[test]
    fn test_swap_is_involution() {
        let text = "ab+/-_cd";
        assert_eq!(swap_alphabet(text), "ab-_+/cd");
        assert_eq!(swap_alphabet(&swap_alphabet(text)), text);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not base64!").is_err());
        // Non-canonical trailing bits
        assert!(decode("-_9").is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), (vec![], String::new()));
    }
}
