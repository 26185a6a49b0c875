//! Update Profile Use Case
//!
//! Partial update of the caller's user fields and profile variant.

use std::sync::Arc;

use crate::application::get_profile::ProfileView;
use crate::domain::entity::{ProfilePatch, User, UserPatch};
use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::error::AuthResult;

/// Update profile input
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub user: UserPatch,
    pub profile: ProfilePatch,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U, P>
where
    U: UserRepository,
    P: ProfileRepository,
{
    user_repo: Arc<U>,
    profile_repo: Arc<P>,
}

impl<U, P> UpdateProfileUseCase<U, P>
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

    pub async fn execute(&self, caller: User, input: UpdateProfileInput) -> AuthResult<ProfileView> {
        let mut user = caller;
        let mut profile = self
            .profile_repo
            .find_by_user(&user.user_id, user.user_type)
            .await?;

        // Validate the profile patch before writing either record
        let profile_changed = match profile.as_mut() {
            Some(p) => p.apply(input.profile)?,
            None => false,
        };
        let user_changed = user.apply(input.user);

        if user_changed {
            self.user_repo.update(&user).await?;
        }
        if let (true, Some(p)) = (profile_changed, profile.as_ref()) {
            self.profile_repo.update(p).await?;
        }

        tracing::info!(
            user_id = %user.user_id,
            user_changed,
            profile_changed,
            "Profile updated"
        );

        Ok(ProfileView { user, profile })
    }
}
