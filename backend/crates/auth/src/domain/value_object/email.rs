//! Email Value Object
//!
//! The login identity. Stored lower-cased so uniqueness is case-insensitive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{AuthError, AuthResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> AuthResult<Self> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(AuthError::Validation("Email cannot be empty".to_string()));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Email must be at most {EMAIL_MAX_LENGTH} characters"
            )));
        }

        if !Self::is_valid_format(&email) {
            return Err(AuthError::Validation("Invalid email format".to_string()));
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH || domain.contains('@') {
            return false;
        }
        if local.chars().any(char::is_whitespace) {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        !(domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains(".."))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = AuthError;

    fn from_str(s: &str) -> AuthResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
