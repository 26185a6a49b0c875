//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use chrono::Duration;
use platform::crypto::{key_fingerprint, random_secret};
use platform::token::SessionTokenCodec;

/// Default access token lifetime
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::minutes(30);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing key for session tokens
    token_secret: Vec<u8>,
    /// Server-wide pepper appended to passwords before hashing
    password_pepper: Vec<u8>,
    /// Lifetime of issued access tokens
    pub access_token_ttl: Duration,
}

impl AuthConfig {
    /// One server secret for both token signing and the password pepper
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        let secret = secret.into();
        Self {
            token_secret: secret.clone(),
            password_pepper: secret,
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
        }
    }

    /// Create config with a random secret (for development)
    ///
    /// Tokens and password hashes do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::new(random_secret().to_vec())
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    pub fn with_password_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = pepper.into();
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> &[u8] {
        &self.password_pepper
    }

    pub fn token_codec(&self) -> SessionTokenCodec {
        SessionTokenCodec::new(&self.token_secret)
    }

    /// Loggable fingerprint of the signing key
    pub fn key_fingerprint(&self) -> String {
        key_fingerprint(&self.token_secret)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &self.key_fingerprint())
            .field("password_pepper", &"[REDACTED]")
            .field("access_token_ttl", &self.access_token_ttl)
            .finish()
    }
}
