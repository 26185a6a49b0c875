//! Session Token Codec
//!
//! Stateless bearer tokens signed with HS256:
//! - Claims: `sub` (subject email), `exp` and `iat` (unix seconds)
//! - One server-wide secret, HS256 is the only accepted algorithm
//! - A token is rejected once `now >= exp`
//! - No revocation list
//!
//! ## Examples
//! ```rust
//! use platform::token::SessionTokenCodec;
//!
//! let codec = SessionTokenCodec::new(b"server-secret");
//! let issued = codec.issue("ana@example.com", None).unwrap();
//! assert_eq!(codec.resolve(&issued.token).unwrap(), "ana@example.com");
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// TTL applied when the caller does not supply one
pub const FALLBACK_TTL: Duration = Duration::minutes(15);

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Token codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Bad signature, wrong algorithm or malformed payload
    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token expired")]
    Expired,

    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// A freshly signed token and its expiry instant
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// HS256 session token issuer and verifier
#[derive(Clone)]
pub struct SessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionTokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked by hand so that `now == exp` is already expired
        // and the clock can be injected.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign a token for `subject` valid for `ttl` (or [`FALLBACK_TTL`])
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Option<Duration>,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = now + ttl.unwrap_or(FALLBACK_TTL);
        let claims = SessionClaims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and return its subject
    pub fn resolve(&self, token: &str) -> Result<String, TokenError> {
        self.resolve_at(token, Utc::now())
    }

    pub fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }
        if data.claims.sub.is_empty() {
            return Err(TokenError::Invalid("empty subject".to_string()));
        }

        Ok(data.claims.sub)
    }
}

impl fmt::Debug for SessionTokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
