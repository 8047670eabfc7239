//! HMAC-SHA256 signing and fixed-time verification

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{Result, TokenError};

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 signature of a signing input
pub(crate) fn sign(message: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    // HMAC accepts keys of any length, so construction cannot fail in practice
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| TokenError::Crypto(format!("HMAC key rejected: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Recompute the signature and compare it against the supplied one
///
/// The comparison is fixed-time over the signature bytes, not an early-exit
/// byte-by-byte equality.
pub(crate) fn verify(message: &[u8], signature: &[u8], secret: &[u8]) -> Result<bool> {
    let expected = sign(message, secret)?;
    Ok(expected.as_slice().ct_eq(signature).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign(b"header.payload", b"secret").unwrap();
        let b = sign(b"header.payload", b"secret").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_sign_differs_by_secret() {
        let a = sign(b"header.payload", b"secret-one").unwrap();
        let b = sign(b"header.payload", b"secret-two").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_round_trip() {
        let signature = sign(b"header.payload", b"secret").unwrap();
        assert!(verify(b"header.payload", &signature, b"secret").unwrap());
        assert!(!verify(b"header.payload", &signature, b"other-secret").unwrap());
        assert!(!verify(b"header.tampered", &signature, b"secret").unwrap());
    }

    #[test]
    fn test_verify_rejects_truncated_signature() {
        let signature = sign(b"header.payload", b"secret").unwrap();
        assert!(!verify(b"header.payload", &signature[..16], b"secret").unwrap());
        assert!(!verify(b"header.payload", b"", b"secret").unwrap());
    }
}
