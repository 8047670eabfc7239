//! Stateless validation checks
//!
//! Each check is a pure predicate over its inputs and fails with exactly one
//! error kind. The builder and the parser compose these; nothing here holds
//! state or reads the clock.

use secrecy::{ExposeSecret, Secret};
use serde_json::{Map, Value};

use crate::claims;
use crate::crypto::{base64url, hmac};
use crate::error::{Result, TokenError};

/// Characters that satisfy the special-character requirement of the secret
/// strength policy
const SECRET_SPECIAL_CHARS: &[char] = &['*', '&', '!', '@', '%', '^', '#', '$'];

/// Minimum secret length in bytes
const SECRET_MIN_LENGTH: usize = 12;

/// Check a signing secret against the strength policy
///
/// The secret must be at least twelve characters long and contain at least
/// one lowercase letter, one uppercase letter, one digit, and one character
/// from `*&!@%^#$`. Enforced when building tokens only; verification accepts
/// any secret.
pub fn secret_strength(secret: &str) -> Result<()> {
    let strong = secret.len() >= SECRET_MIN_LENGTH
        && secret.chars().any(|c| c.is_ascii_lowercase())
        && secret.chars().any(|c| c.is_ascii_uppercase())
        && secret.chars().any(|c| c.is_ascii_digit())
        && secret.chars().any(|c| SECRET_SPECIAL_CHARS.contains(&c));

    if strong {
        Ok(())
    } else {
        Err(TokenError::WeakSecret)
    }
}

/// Check the `exp` claim of a decoded payload against the supplied clock
/// value
///
/// A payload without an `exp` claim is treated as non-expiring and passes.
/// A token whose `exp` equals `now` has not yet elapsed and passes; only
/// `exp < now` fails.
pub fn expiration(payload: &Map<String, Value>, now: i64) -> Result<()> {
    let Some(value) = payload.get(claims::EXPIRATION) else {
        return Ok(());
    };

    let expired_at = value.as_i64().ok_or_else(|| {
        TokenError::DecodeError("exp claim is not an integer timestamp".to_string())
    })?;

    if expired_at < now {
        return Err(TokenError::Expired { expired_at, now });
    }

    Ok(())
}

/// Split a raw token into its three segments
///
/// Fails with `MalformedToken` unless the input is exactly three non-empty
/// dot-separated segments.
pub fn structure(raw: &str) -> Result<(&str, &str, &str)> {
    let mut parts = raw.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok((header, payload, signature))
        }
        _ => Err(TokenError::MalformedToken),
    }
}

/// Verify the signature segment against the header and payload segments
///
/// Decodes the supplied signature, recomputes HMAC-SHA256 over
/// `"<header>.<payload>"` and compares the two in fixed time.
pub fn signature(
    header_segment: &str,
    payload_segment: &str,
    signature_segment: &str,
    secret: &Secret<String>,
) -> Result<()> {
    let supplied = base64url::decode(signature_segment)?;
    let message = format!("{header_segment}.{payload_segment}");

    if hmac::verify(
        message.as_bytes(),
        &supplied,
        secret.expose_secret().as_bytes(),
    )? {
        Ok(())
    } else {
        Err(TokenError::InvalidSignature)
    }
}
