//! Immutable token value

use secrecy::Secret;

/// A raw compact token paired with the secret used to sign or verify it
///
/// Built tokens come out of [`Builder::build`](crate::Builder::build) with
/// all three segments populated; inbound tokens are wrapped directly from
/// their transport representation. Construction never verifies anything;
/// verification is an explicit [`Parser`](crate::Parser) step.
///
/// # Example
/// ```rust
/// use hmac_jwt::{Jwt, Parser};
///
/// let jwt = Jwt::new("aaa.bbb.ccc", "Hello123$$Abc!!4538");
/// assert_eq!(jwt.token(), "aaa.bbb.ccc");
///
/// // Nothing has been checked yet; validation is explicit
/// assert!(Parser::new(jwt).validate().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Jwt {
    token: String,
    secret: Secret<String>,
}

impl Jwt {
    /// Wrap a raw token string and the secret it should verify against
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: Secret::new(secret.into()),
        }
    }

    /// Pair an already-built token with the secret that signed it
    pub(crate) fn with_secret(token: String, secret: Secret<String>) -> Self {
        Self { token, secret }
    }

    /// The `"<header>.<payload>.<signature>"` string
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The secret this token is signed or verified with
    pub fn secret(&self) -> &Secret<String> {
        &self.secret
    }
}
