//! Register Use Case
//!
//! Creates a user, its credential and exactly one profile, then issues a
//! session token.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::application::AuthOutput;
use crate::application::config::AuthConfig;
use crate::domain::entity::{Credential, Profile, ProfileDetails, ProfileDraft, User};
use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::value_object::{Email, UserType};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    pub full_name: String,
    pub phone: String,
    pub location: Option<String>,
    pub profile: ProfileDraft,
}

/// Register use case
pub struct RegisterUseCase<U, P>
where
    U: UserRepository,
    P: ProfileRepository,
{
    user_repo: Arc<U>,
    profile_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<U, P> RegisterUseCase<U, P>
where
    U: UserRepository,
    P: ProfileRepository,
{
    pub fn new(user_repo: Arc<U>, profile_repo: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            profile_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        // Validate everything before touching storage
        let email = Email::new(&input.email)?;
        let password = PlainPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let details = ProfileDetails::from_draft(input.user_type, input.profile)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateIdentity);
        }

        let digest = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(
            email,
            input.user_type,
            input.full_name,
            input.phone,
            input.location,
        );
        let credential = Credential::new(user.user_id, digest);
        let profile = Profile::new(user.user_id, details);

        // A racing insert with the same email surfaces as DuplicateIdentity here
        self.user_repo.create(&user, &credential).await?;

        if let Err(e) = self.profile_repo.create(&profile).await {
            self.compensate(&user).await;
            return Err(e);
        }

        let token = self
            .config
            .token_codec()
            .issue(user.email.as_str(), Some(self.config.access_token_ttl))?;

        tracing::info!(
            user_id = %user.user_id,
            user_type = %user.user_type,
            "User registered"
        );

        Ok(AuthOutput {
            user,
            profile: Some(profile),
            token,
        })
    }

    /// Remove the user row left behind by a failed profile insert
    async fn compensate(&self, user: &User) {
        match self.user_repo.delete(&user.user_id).await {
            Ok(()) => {
                tracing::warn!(
                    user_id = %user.user_id,
                    "Profile insert failed, registration rolled back"
                );
            }
            Err(e) => {
                tracing::error!(
                    user_id = %user.user_id,
                    error = %e,
                    "Profile insert failed and user cleanup failed, orphan user left behind"
                );
            }
        }
    }
}
