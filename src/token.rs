//! Convenience entry points for the common token flows
//!
//! Free functions composing [`Builder`] and [`Parser`], with no
//! process-wide state. These are the only places the wall clock is read;
//! it is sampled once per call and handed to the core as a plain value, so
//! builder and parser stay deterministic.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::build::Builder;
use crate::error::Result;
use crate::jwt::Jwt;
use crate::parse::Parser;

/// Name of the private claim carrying the subject identifier in
/// [`issue`]d tokens
pub const USER_ID: &str = "user_id";

/// Issue a token that carries a single `user_id` private claim
///
/// # Arguments
/// * `user_id` - Subject identifier, any JSON-representable value
/// * `secret` - Signing secret; must meet the strength policy
/// * `expiration` - `exp` claim (Unix timestamp, seconds); must not be in
///   the past
/// * `issuer` - `iss` claim
///
/// # Example
/// ```rust
/// use chrono::Utc;
///
/// let token = hmac_jwt::issue(
///     42,
///     "Hello123$$Abc!!4538",
///     Utc::now().timestamp() + 300,
///     "issuer.example",
/// )
/// .unwrap();
///
/// assert!(hmac_jwt::is_valid(&token, "Hello123$$Abc!!4538"));
/// ```
pub fn issue(
    user_id: impl Into<Value>,
    secret: &str,
    expiration: i64,
    issuer: &str,
) -> Result<String> {
    let jwt = builder()
        .private_claim(USER_ID, user_id)
        .secret(secret)?
        .expiration(expiration)?
        .issuer(issuer)
        .build()?;

    Ok(jwt.token().to_string())
}

/// Check a token's signature and expiration
///
/// Returns `true` only if both checks pass; every failure kind collapses to
/// `false`. Callers that need the failure reason should use [`validator`]
/// and run the [`Parser`] stages directly.
pub fn is_valid(token: &str, secret: &str) -> bool {
    let now = Utc::now().timestamp();
    let parser = validator(token, secret);
    parser
        .validate()
        .and_then(|parser| parser.validate_expiration(now))
        .is_ok()
}

/// Verify a token's signature and return its decoded claims
///
/// Expiration is deliberately not checked here; run [`is_valid`] or
/// [`Parser::validate_expiration`] when freshness matters.
pub fn read_payload(token: &str, secret: &str) -> Result<Map<String, Value>> {
    let parser = validator(token, secret);
    let decoded = parser.validate()?.parse()?;
    Ok(decoded.into_payload())
}

/// A token builder seeded with the current time
pub fn builder() -> Builder {
    Builder::new(Utc::now().timestamp())
}

/// A parser over a raw token string and the secret to verify it with
pub fn validator(token: &str, secret: &str) -> Parser {
    Parser::new(Jwt::new(token, secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use serde_json::json;

    const SECRET: &str = "Hello123$$Abc!!4538";

    #[test]
    fn test_issue_and_read_payload() {
        let expiration = Utc::now().timestamp() + 300;
        let token = issue(42, SECRET, expiration, "issuer.example").unwrap();

        let payload = read_payload(&token, SECRET).unwrap();
        assert_eq!(payload.get("user_id"), Some(&json!(42)));
        assert_eq!(payload.get("iss"), Some(&json!("issuer.example")));
        assert_eq!(payload.get("exp"), Some(&json!(expiration)));
    }

    #[test]
    fn test_issue_with_string_subject() {
        let expiration = Utc::now().timestamp() + 300;
        let token = issue("abc-123", SECRET, expiration, "issuer.example").unwrap();

        let payload = read_payload(&token, SECRET).unwrap();
        assert_eq!(payload.get("user_id"), Some(&json!("abc-123")));
    }

    #[test]
    fn test_issue_rejects_weak_secret_before_producing_a_token() {
        let result = issue(1, "weak", Utc::now().timestamp() + 300, "x");
        assert!(matches!(result, Err(TokenError::WeakSecret)));
    }

    #[test]
    fn test_is_valid_accepts_fresh_token() {
        let token = issue(42, SECRET, Utc::now().timestamp() + 300, "issuer.example").unwrap();
        assert!(is_valid(&token, SECRET));
    }

    #[test]
    fn test_is_valid_collapses_failures_to_false() {
        let token = issue(42, SECRET, Utc::now().timestamp() + 300, "issuer.example").unwrap();

        // Wrong secret
        assert!(!is_valid(&token, "Different123$$Secret"));
        // Malformed structure
        assert!(!is_valid("not.a.jwt.token", SECRET));
        assert!(!is_valid("", SECRET));
        // Expired
        let expired = builder()
            .private_claim(USER_ID, 42)
            .secret(SECRET)
            .unwrap()
            .expiration(Utc::now().timestamp())
            .unwrap()
            .build()
            .unwrap();
        let parser = validator(expired.token(), SECRET);
        assert!(matches!(
            parser.validate_expiration(Utc::now().timestamp() + 60),
            Err(TokenError::Expired { .. })
        ));
    }

    #[test]
    fn test_read_payload_propagates_signature_failure() {
        let token = issue(42, SECRET, Utc::now().timestamp() + 300, "issuer.example").unwrap();
        assert!(matches!(
            read_payload(&token, "Different123$$Secret"),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_read_payload_does_not_check_expiration() {
        // exp == now: still readable, freshness is the caller's concern
        let now = Utc::now().timestamp();
        let jwt = Builder::new(now)
            .private_claim(USER_ID, 7)
            .secret(SECRET)
            .unwrap()
            .expiration(now)
            .unwrap()
            .build()
            .unwrap();

        let payload = read_payload(jwt.token(), SECRET).unwrap();
        assert_eq!(payload.get("user_id"), Some(&json!(7)));
    }

    #[test]
    fn test_validator_wraps_raw_token() {
        let token = issue(42, SECRET, Utc::now().timestamp() + 300, "issuer.example").unwrap();
        let parser = validator(&token, SECRET);
        assert_eq!(parser.jwt().token(), token);
        assert!(parser.validate().is_ok());
    }

    // Interop: the widely published HS256 example token. Our decoder accepts
    // its alg-first header because signature verification runs over the raw
    // segments, not a re-serialization.
    #[test]
    fn test_known_vector_verifies() {
        let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
                     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

        let payload = read_payload(token, "your-256-bit-secret").unwrap();
        assert_eq!(payload.get("sub"), Some(&json!("1234567890")));
        assert_eq!(payload.get("name"), Some(&json!("John Doe")));
        assert_eq!(payload.get("iat"), Some(&json!(1_516_239_022)));

        // No exp claim, so the token never expires
        assert!(is_valid(token, "your-256-bit-secret"));
        assert!(!is_valid(token, "some-other-secret"));
    }
}
