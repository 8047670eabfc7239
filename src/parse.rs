//! Token parsing and validation chain

use serde_json::{Map, Value};

use crate::claims::Header;
use crate::crypto::base64url;
use crate::error::{Result, TokenError};
use crate::jwt::Jwt;
use crate::validate;

/// Validates and decodes one [`Jwt`]
///
/// The three stages chain with `?`:
///
/// 1. [`validate`](Self::validate): structure, then signature
/// 2. [`validate_expiration`](Self::validate_expiration): the `exp` claim
///    against a caller-supplied clock value
/// 3. [`parse`](Self::parse): decode header and payload into [`Decoded`]
///
/// The stages are not hard-coupled: calling `parse()` without `validate()`
/// is permitted and returns whatever the segments structurally decode to,
/// trusting nothing. Verification is opt-in per call; skipping it hands you
/// potentially forged claims.
///
/// # Example
/// ```rust
/// use chrono::Utc;
/// use hmac_jwt::{Builder, Parser};
///
/// let now = Utc::now().timestamp();
/// let jwt = Builder::new(now)
///     .private_claim("user_id", 42)
///     .secret("Hello123$$Abc!!4538").unwrap()
///     .expiration(now + 300).unwrap()
///     .build()
///     .unwrap();
///
/// let parser = Parser::new(jwt);
/// let decoded = parser
///     .validate().unwrap()
///     .validate_expiration(now).unwrap()
///     .parse().unwrap();
///
/// assert_eq!(decoded.int_claim("user_id").unwrap(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct Parser {
    jwt: Jwt,
}

impl Parser {
    /// Take ownership of the token value to check
    ///
    /// The token is only ever read; clone the [`Jwt`] first if you need to
    /// keep it.
    pub fn new(jwt: Jwt) -> Self {
        Self { jwt }
    }

    /// The token value under inspection
    pub fn jwt(&self) -> &Jwt {
        &self.jwt
    }

    /// Check the token structure and signature
    ///
    /// Fails with `MalformedToken` if the raw string is not three non-empty
    /// dot-separated segments, or `InvalidSignature` if the recomputed
    /// signature does not match the one the token carries. Returns the
    /// parser itself so further stages chain.
    pub fn validate(&self) -> Result<&Self> {
        let (header, payload, signature) = self.segments()?;
        validate::signature(header, payload, signature, self.jwt.secret())?;
        Ok(self)
    }

    /// Check the payload's `exp` claim against the supplied clock value
    ///
    /// A token without an `exp` claim never expires and passes. Fails with
    /// `Expired` once `exp < now`.
    pub fn validate_expiration(&self, now: i64) -> Result<&Self> {
        let payload = self.decode_payload()?;
        validate::expiration(&payload, now)?;
        Ok(self)
    }

    /// Decode the header and payload segments into claims
    ///
    /// Performs no verification of its own; run [`validate`](Self::validate)
    /// first before trusting the result.
    pub fn parse(&self) -> Result<Decoded> {
        let (header_segment, _, _) = self.segments()?;
        let header_json = base64url::decode(header_segment)?;
        let header: Header = serde_json::from_slice(&header_json)
            .map_err(|e| TokenError::DecodeError(format!("header is not valid JSON: {e}")))?;

        Ok(Decoded {
            header,
            payload: self.decode_payload()?,
        })
    }

    fn segments(&self) -> Result<(&str, &str, &str)> {
        validate::structure(self.jwt.token())
    }

    fn decode_payload(&self) -> Result<Map<String, Value>> {
        let (_, payload_segment, _) = self.segments()?;
        let payload_json = base64url::decode(payload_segment)?;
        serde_json::from_slice(&payload_json)
            .map_err(|e| TokenError::DecodeError(format!("payload is not valid JSON: {e}")))
    }
}

/// Decoded header and claim set of a parsed token
///
/// Claims are exposed as the full mapping, by-name lookup, or typed
/// accessors. The typed accessors return `Ok(None)` for an absent claim and
/// fail with `ClaimTypeMismatch` when the claim exists with another JSON
/// type; they never coerce.
#[derive(Clone, Debug)]
pub struct Decoded {
    header: Header,
    payload: Map<String, Value>,
}

impl Decoded {
    /// The decoded header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The full claim mapping
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// The full claim mapping, by value
    pub fn into_payload(self) -> Map<String, Value> {
        self.payload
    }

    /// Look up a claim by name
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// A string claim by name
    pub fn string_claim(&self, name: &str) -> Result<Option<&str>> {
        match self.payload.get(name) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(TokenError::ClaimTypeMismatch {
                claim: name.to_string(),
                expected: "string",
            }),
        }
    }

    /// An integer claim by name
    pub fn int_claim(&self, name: &str) -> Result<Option<i64>> {
        match self.payload.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| TokenError::ClaimTypeMismatch {
                    claim: name.to_string(),
                    expected: "integer",
                }),
        }
    }

    /// A boolean claim by name
    pub fn bool_claim(&self, name: &str) -> Result<Option<bool>> {
        match self.payload.get(name) {
            None => Ok(None),
            Some(Value::Bool(value)) => Ok(Some(*value)),
            Some(_) => Err(TokenError::ClaimTypeMismatch {
                claim: name.to_string(),
                expected: "boolean",
            }),
        }
    }
}
