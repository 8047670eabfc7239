//! # hmac-jwt
//!
//! A Rust library for issuing and verifying **compact JSON Web Tokens**
//! signed with **HMAC-SHA256** under a shared secret. Embed standard and
//! private claims into a token, sign it, and later verify the signature and
//! expiration before trusting the embedded claims.
//!
//! ## Features
//!
//! - **Compact serialization** - the standard three-segment wire format,
//!   unpadded base64url, interoperable with other JWT implementations
//! - **Fail-fast building** - secret strength and expiration invariants are
//!   enforced at the setter, never deferred to `build()`
//! - **Explicit verification** - signature checks use a fixed-time
//!   comparison and are opt-in per call; nothing is trusted implicitly
//! - **Deterministic time handling** - the core never reads the system
//!   clock; "now" is injected, so validation is testable
//! - **Stateless design** - plain values throughout, no shared state
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//!
//! let secret = "Hello123$$Abc!!4538";
//! let expiration = Utc::now().timestamp() + 300;
//!
//! // Issue a token carrying a user identifier
//! let token = hmac_jwt::issue(42, secret, expiration, "issuer.example").unwrap();
//!
//! // Validate signature and expiration
//! assert!(hmac_jwt::is_valid(&token, secret));
//!
//! // Read the verified claims
//! let payload = hmac_jwt::read_payload(&token, secret).unwrap();
//! assert_eq!(payload.get("user_id"), Some(&serde_json::json!(42)));
//! ```
//!
//! For anything beyond the single-claim convenience flow, drop down to the
//! [`Builder`] and [`Parser`] types:
//!
//! ```rust
//! use chrono::Utc;
//! use hmac_jwt::{Builder, Parser};
//!
//! let now = Utc::now().timestamp();
//! let jwt = Builder::new(now)
//!     .private_claim("user_id", 42)
//!     .private_claim("admin", true)
//!     .secret("Hello123$$Abc!!4538").unwrap()
//!     .expiration(now + 300).unwrap()
//!     .issuer("issuer.example")
//!     .build()
//!     .unwrap();
//!
//! let decoded = Parser::new(jwt.clone())
//!     .validate().unwrap()
//!     .validate_expiration(now).unwrap()
//!     .parse().unwrap();
//! assert_eq!(decoded.bool_claim("admin").unwrap(), Some(true));
//! ```

pub mod build;
pub mod claims;
pub(crate) mod crypto;
pub mod error;
pub mod jwt;
pub mod parse;
pub mod token;
pub mod validate;

// Re-export main types for easier access
pub use build::Builder;
pub use claims::Header;
pub use error::{Result, TokenError};
pub use jwt::Jwt;
pub use parse::{Decoded, Parser};
pub use token::{builder, is_valid, issue, read_payload, validator};
