//! Get Profile Use Case
//!
//! Reads a user merged with its profile variant.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::{Profile, User};
use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::value_object::UserType;
use crate::error::{AuthError, AuthResult};

/// A user with the profile it owns, if any
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub user: User,
    pub profile: Option<Profile>,
}

/// Get profile use case
pub struct GetProfileUseCase<U, P>
where
    U: UserRepository,
    P: ProfileRepository,
{
    user_repo: Arc<U>,
    profile_repo: Arc<P>,
}

impl<U, P> GetProfileUseCase<U, P>
where
    U: UserRepository,
    P: ProfileRepository,
{
    pub fn new(user_repo: Arc<U>, profile_repo: Arc<P>) -> Self {
        Self {
            user_repo,
            profile_repo,
        }
    }

    /// Any user by id
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<ProfileView> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::NotFound("User"))?;

        self.own(user).await
    }

    /// A professional by user id; other account kinds are not found
    pub async fn professional(&self, user_id: &UserId) -> AuthResult<ProfileView> {
        let view = match self.execute(user_id).await {
            Err(AuthError::NotFound(_)) => return Err(AuthError::NotFound("Professional")),
            other => other?,
        };

        if view.user.user_type != UserType::Professional || view.profile.is_none() {
            return Err(AuthError::NotFound("Professional"));
        }
        Ok(view)
    }

    /// The caller's own view; a missing profile is not an error
    pub async fn own(&self, user: User) -> AuthResult<ProfileView> {
        let profile = self
            .profile_repo
            .find_by_user(&user.user_id, user.user_type)
            .await?;

        Ok(ProfileView { user, profile })
    }
}
