//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{Credential, Profile, RatingSummary, User};
use crate::domain::value_object::{Email, UserType};
use crate::error::AuthResult;

/// Upper bound on every directory listing
pub const LIST_LIMIT: usize = 100;

/// Filters for the professional directory
#[derive(Debug, Clone, Default)]
pub struct ProfessionalFilter {
    /// Exact membership in `specialties`
    pub specialty: Option<String>,
    /// Case-insensitive substring of the user's location
    pub location: Option<String>,
}

impl ProfessionalFilter {
    pub fn matches(&self, user: &User, profile: &Profile) -> bool {
        let Some(details) = profile.as_professional() else {
            return false;
        };
        if let Some(specialty) = &self.specialty {
            if !details.specialties.iter().any(|s| s == specialty) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !user
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a user together with its credential
    ///
    /// Fails with `DuplicateIdentity` when the email is taken.
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Load the credential of a user
    async fn find_credential(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update the editable user fields
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Delete a user and its credential
    async fn delete(&self, user_id: &UserId) -> AuthResult<()>;
}

/// Profile repository trait
///
/// One store per variant; `user_type` selects which one is touched.
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Create a profile in the store matching its variant
    async fn create(&self, profile: &Profile) -> AuthResult<()>;

    /// Find the profile owned by a user
    async fn find_by_user(
        &self,
        user_id: &UserId,
        user_type: UserType,
    ) -> AuthResult<Option<Profile>>;

    /// Write the variant attributes; rating aggregates are left alone
    async fn update(&self, profile: &Profile) -> AuthResult<()>;

    /// Overwrite the rating aggregates
    ///
    /// Returns `false` when the user owns no profile of that variant.
    async fn update_rating(
        &self,
        user_id: &UserId,
        user_type: UserType,
        rating: RatingSummary,
    ) -> AuthResult<bool>;

    /// Professionals joined with their user, at most `limit`
    async fn list_professionals(
        &self,
        filter: &ProfessionalFilter,
        limit: usize,
    ) -> AuthResult<Vec<(User, Profile)>>;
}
