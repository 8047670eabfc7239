//! Claim names and the fixed token header

use serde::{Deserialize, Serialize};

/// Name of the standard expiration claim (Unix timestamp, seconds)
pub const EXPIRATION: &str = "exp";

/// Name of the standard issuer claim
pub const ISSUER: &str = "iss";

/// JOSE header of every token this crate produces
///
/// Fixed to `typ = "JWT"` and `alg = "HS256"`; not user-configurable. The
/// field order here is the contractual JSON key order on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub typ: String,
    pub alg: String,
}

impl Header {
    /// The only header this crate signs with
    pub fn hs256() -> Self {
        Self {
            typ: "JWT".to_string(),
            alg: "HS256".to_string(),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::hs256()
    }
}
