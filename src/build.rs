//! Fluent token builder

use secrecy::{ExposeSecret, Secret};
use serde_json::{Map, Value};

use crate::claims::{self, Header};
use crate::crypto::{base64url, hmac};
use crate::error::{Result, TokenError};
use crate::jwt::Jwt;
use crate::validate;

/// Accumulates header and payload claims, then serializes and signs them
/// into a [`Jwt`]
///
/// Setters chain by value; the fallible ones (`secret`, `expiration`) fail
/// fast at the call that violates the invariant rather than deferring the
/// error to `build()`. Building borrows the accumulated state, so one
/// builder can produce any number of tokens; identical state yields an
/// identical token string.
///
/// # Example
/// ```rust
/// use chrono::Utc;
/// use hmac_jwt::Builder;
///
/// let now = Utc::now().timestamp();
/// let jwt = Builder::new(now)
///     .private_claim("user_id", 42)
///     .secret("Hello123$$Abc!!4538").unwrap()
///     .expiration(now + 300).unwrap()
///     .issuer("issuer.example")
///     .build()
///     .unwrap();
///
/// assert_eq!(jwt.token().split('.').count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    header: Header,
    secret: Option<Secret<String>>,
    expiration: Option<i64>,
    issuer: Option<String>,
    private: Map<String, Value>,
    now: i64,
}

impl Builder {
    /// Create a builder against an injected clock value (Unix seconds)
    ///
    /// The builder never reads the system clock; `now` is the reference
    /// point for the `expiration` check. The [`builder`](crate::builder)
    /// facade samples the clock once and passes it here.
    pub fn new(now: i64) -> Self {
        Self {
            header: Header::hs256(),
            secret: None,
            expiration: None,
            issuer: None,
            private: Map::new(),
            now,
        }
    }

    /// Set the signing secret
    ///
    /// Fails immediately with `WeakSecret` if the secret does not meet the
    /// strength policy (twelve-plus characters with a lowercase letter, an
    /// uppercase letter, a digit, and one of `*&!@%^#$`).
    pub fn secret(mut self, secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        validate::secret_strength(&secret)?;
        self.secret = Some(Secret::new(secret));
        Ok(self)
    }

    /// Set the `exp` claim (Unix timestamp, seconds)
    ///
    /// Fails immediately with `AlreadyExpired` if the timestamp is earlier
    /// than the builder's clock value.
    pub fn expiration(mut self, timestamp: i64) -> Result<Self> {
        if timestamp < self.now {
            return Err(TokenError::AlreadyExpired {
                expiration: timestamp,
                now: self.now,
            });
        }
        self.expiration = Some(timestamp);
        Ok(self)
    }

    /// Set the `iss` claim
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Insert a private claim
    ///
    /// Re-using a name overwrites the previous value. Standard claims are
    /// merged after private claims at serialization, so a private claim
    /// named `exp` or `iss` is overwritten by the value set through
    /// [`expiration`](Self::expiration) / [`issuer`](Self::issuer).
    pub fn private_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.private.insert(name.into(), value.into());
        self
    }

    /// The merged claim mapping (private claims plus `exp` and `iss`) as it
    /// would be serialized, without building
    pub fn payload(&self) -> Map<String, Value> {
        let mut payload = self.private.clone();
        if let Some(expiration) = self.expiration {
            payload.insert(claims::EXPIRATION.to_string(), Value::from(expiration));
        }
        if let Some(issuer) = &self.issuer {
            payload.insert(claims::ISSUER.to_string(), Value::from(issuer.clone()));
        }
        payload
    }

    /// The fixed header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Serialize, sign and return the token
    ///
    /// Fails with `MissingSecret` if no secret was set. The builder is not
    /// consumed; repeated builds of unchanged state produce identical
    /// tokens.
    pub fn build(&self) -> Result<Jwt> {
        let secret = self.secret.as_ref().ok_or(TokenError::MissingSecret)?;

        let header_json = serde_json::to_vec(&self.header)
            .map_err(|e| TokenError::DecodeError(format!("header serialization failed: {e}")))?;
        let payload_json = serde_json::to_vec(&self.payload())
            .map_err(|e| TokenError::DecodeError(format!("payload serialization failed: {e}")))?;

        let message = format!(
            "{}.{}",
            base64url::encode(&header_json),
            base64url::encode(&payload_json)
        );
        let signature = hmac::sign(message.as_bytes(), secret.expose_secret().as_bytes())?;

        Ok(Jwt::with_secret(
            format!("{}.{}", message, base64url::encode(&signature)),
            secret.clone(),
        ))
    }
}
