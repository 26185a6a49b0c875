//! User Entity
//!
//! Identity and contact data shared by every account kind.
//! The password digest lives in [`Credential`](super::credential::Credential).

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{Email, UserType};

/// Location assigned when registration leaves it out
pub const DEFAULT_LOCATION: &str = "Bogotá";

/// User entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: UserId,
    /// Unique, lower-cased
    pub email: Email,
    /// Immutable after creation
    pub user_type: UserType,
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of the editable user fields
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.profile_image.is_none()
    }
}

impl User {
    /// Create a new user
    pub fn new(
        email: Email,
        user_type: UserType,
        full_name: String,
        phone: String,
        location: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let location = location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        Self {
            user_id: UserId::new(),
            email,
            user_type,
            full_name: full_name.trim().to_string(),
            phone: phone.trim().to_string(),
            location,
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a patch; returns whether anything was written
    pub fn apply(&mut self, patch: UserPatch) -> bool {
        if patch.is_empty() {
            return false;
        }

        if let Some(full_name) = patch.full_name {
            self.full_name = full_name.trim().to_string();
        }
        if let Some(phone) = patch.phone {
            self.phone = phone.trim().to_string();
        }
        if let Some(location) = patch.location {
            self.location = location.trim().to_string();
        }
        if let Some(profile_image) = patch.profile_image {
            self.profile_image = Some(profile_image).filter(|s| !s.is_empty());
        }

        self.updated_at = Utc::now();
        true
    }
}
