//! Credential Codec
//!
//! Password hashing and verification:
//! - Argon2id with a per-record random salt
//! - A server-wide pepper appended to the password before hashing
//! - Zeroization of clear text in memory
//! - Verification that never errors: bad input is simply a non-match
//!
//! ## Examples
//! ```rust
//! use platform::password::PlainPassword;
//!
//! let pepper = b"server-secret";
//! let password = PlainPassword::new("correct horse battery".to_string()).unwrap();
//! let digest = password.hash(pepper).unwrap();
//! assert!(digest.verify(&password, pepper));
//! ```

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Minimum password length in Unicode code points
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Plain Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Create a password for a new credential, enforcing the input policy
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::normalized(raw);

        if password.0.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = password.0.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if password
            .0
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(password)
    }

    /// Create a password for checking against a stored digest
    ///
    /// No policy is applied: a candidate that could never have been
    /// registered simply fails to verify.
    pub fn candidate(raw: String) -> Self {
        Self::normalized(raw)
    }

    fn normalized(mut raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    fn peppered(&self, pepper: &[u8]) -> Zeroizing<Vec<u8>> {
        let mut combined = Zeroizing::new(Vec::with_capacity(self.0.len() + pepper.len()));
        combined.extend_from_slice(self.0.as_bytes());
        combined.extend_from_slice(pepper);
        combined
    }

    /// Hash the password with Argon2id and a fresh random salt
    ///
    /// ## Arguments
    /// * `pepper` - server-wide secret appended to the password
    pub fn hash(&self, pepper: &[u8]) -> Result<PasswordDigest, PasswordHashError> {
        let salt = SaltString::generate(OsRng);
        let hash = Argon2::default()
            .hash_password(&self.peppered(pepper), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(PasswordDigest {
            phc: hash.to_string(),
        })
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Digest (Safe to store)
// ============================================================================

/// Stored credential digest in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    phc: String,
}

impl PasswordDigest {
    /// Load a digest from storage, rejecting strings that are not PHC
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = s.into();
        PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { phc })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.phc
    }

    /// Verify a password against this digest
    ///
    /// The pepper must match the one used at hashing time. Argon2 compares
    /// in constant time.
    pub fn verify(&self, password: &PlainPassword, pepper: &[u8]) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.phc) else {
            return false;
        };

        Argon2::default()
            .verify_password(&password.peppered(pepper), &parsed)
            .is_ok()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("phc", &"[HASH]")
            .finish()
    }
}
