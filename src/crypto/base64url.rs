//! Base64url segment codec per RFC 4648 §5
//!
//! Emitted segments carry no padding. Decoding accepts both padded and
//! unpadded input, so tokens minted by stricter implementations still parse.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{Result, TokenError};

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as an unpadded base64url segment
pub(crate) fn encode(input: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(input)
}

/// Decode a base64url segment to bytes
///
/// Fails with `DecodeError` if the input contains characters outside the
/// base64url alphabet.
pub(crate) fn decode(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_LENIENT
        .decode(input)
        .map_err(|e| TokenError::DecodeError(format!("segment is not valid base64url: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_strips_padding() {
        assert_eq!(encode(b"Hello"), "SGVsbG8");
        assert_eq!(encode(b"He"), "SGU");
        assert!(!encode(b"Hell").contains('='));
    }

    #[test]
    fn test_encode_url_safe_alphabet() {
        // 0xfb 0xff encodes to '+' '/' under the standard alphabet
        let encoded = encode(&[0xfb, 0xff, 0xbf]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(encoded, "-_-_");
    }

    #[test]
    fn test_decode_accepts_padded_and_unpadded() {
        assert_eq!(decode("SGVsbG8").unwrap(), b"Hello");
        assert_eq!(decode("SGVsbG8=").unwrap(), b"Hello");
        assert_eq!(decode("SGU").unwrap(), b"He");
        assert_eq!(decode("SGU=").unwrap(), b"He");
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        assert!(matches!(decode("no spaces!"), Err(TokenError::DecodeError(_))));
        assert!(matches!(decode("a+b/c"), Err(TokenError::DecodeError(_))));
    }

    #[test]
    fn test_round_trip() {
        let input = br#"{"typ":"JWT","alg":"HS256"}"#;
        assert_eq!(decode(&encode(input)).unwrap(), input);
    }
}
