use std::fmt;

/// Token building and validation errors
///
/// Builder-side variants (`WeakSecret`, `MissingSecret`, `AlreadyExpired`)
/// are raised at the call that violates the invariant, never deferred to
/// `build()`. Parser-side variants propagate through the validation chain;
/// the `is_valid` facade collapses all of them into `false`.
///
/// # Example
/// ```rust
/// use hmac_jwt::{Result, TokenError};
///
/// fn handle_validation(result: Result<()>) {
///     match result {
///         Ok(()) => println!("Token accepted"),
///         Err(TokenError::Expired { expired_at, now }) => {
///             println!("Token expired at {expired_at} (now: {now})")
///         }
///         Err(e) => println!("Rejected: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub enum TokenError {
    /// Secret fails the strength policy
    ///
    /// A signing secret must be at least twelve characters long and contain
    /// a lowercase letter, an uppercase letter, a digit, and one of
    /// `*&!@%^#$`. Raised when setting the secret on a builder, never on
    /// the verification path.
    WeakSecret,

    /// `build()` was invoked before a secret was set
    MissingSecret,

    /// The expiration timestamp handed to the builder is already in the past
    AlreadyExpired {
        /// The rejected timestamp
        expiration: i64,
        /// The clock value the builder was created with
        now: i64,
    },

    /// Raw token does not split into exactly three non-empty dot-separated
    /// segments
    MalformedToken,

    /// Recomputed signature does not match the one carried by the token
    ///
    /// This error occurs when:
    /// - The token was signed with a different secret
    /// - The header or payload segment was tampered with
    InvalidSignature,

    /// The payload's `exp` claim is in the past relative to "now"
    Expired {
        /// The `exp` claim carried by the token
        expired_at: i64,
        /// The clock value supplied to the expiration check
        now: i64,
    },

    /// A segment is not valid base64url, or its decoded bytes are not the
    /// expected JSON
    DecodeError(String),

    /// A typed claim accessor was used on a claim of another JSON type
    ClaimTypeMismatch {
        /// Name of the claim that was looked up
        claim: String,
        /// JSON type the accessor expected
        expected: &'static str,
    },

    /// Generic cryptographic operation error
    ///
    /// Covers unexpected failures in the underlying HMAC machinery that
    /// don't fit into other categories.
    Crypto(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::WeakSecret => {
                write!(
                    f,
                    "Please set a valid secret. It must be at least twelve characters \
                     in length, contain lower and upper case letters, a number and one \
                     of the following characters *&!@%^#$"
                )
            }
            TokenError::MissingSecret => {
                write!(f, "Please set a secret before building the token")
            }
            TokenError::AlreadyExpired { expiration, now } => {
                write!(
                    f,
                    "The expiration timestamp you set has already expired: {expiration} (now: {now})"
                )
            }
            TokenError::MalformedToken => {
                write!(
                    f,
                    "Token is malformed: expected three non-empty segments separated by '.'"
                )
            }
            TokenError::InvalidSignature => {
                write!(f, "Token signature does not match")
            }
            TokenError::Expired { expired_at, now } => {
                write!(f, "Token has expired at {expired_at} (now: {now})")
            }
            TokenError::DecodeError(msg) => {
                write!(f, "Decode error: {msg}")
            }
            TokenError::ClaimTypeMismatch { claim, expected } => {
                write!(f, "Claim '{claim}' is not of the expected type '{expected}'")
            }
            TokenError::Crypto(msg) => {
                write!(f, "Cryptographic error: {msg}")
            }
        }
    }
}

impl std::error::Error for TokenError {}

pub type Result<T> = std::result::Result<T, TokenError>;
