//! Authenticate Use Case
//!
//! Checks email + password and issues a session token.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::application::AuthOutput;
use crate::application::config::AuthConfig;
use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U, P>
where
    U: UserRepository,
    P: ProfileRepository,
{
    user_repo: Arc<U>,
    profile_repo: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<U, P> AuthenticateUseCase<U, P>
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

    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<AuthOutput> {
        // Unknown email and wrong password are indistinguishable to the caller
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let Some(credential) = self.user_repo.find_credential(&user.user_id).await? else {
            tracing::error!(user_id = %user.user_id, "User has no credential");
            return Err(AuthError::InvalidCredentials);
        };

        let password = PlainPassword::candidate(input.password);
        if !credential.password.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let profile = self
            .profile_repo
            .find_by_user(&user.user_id, user.user_type)
            .await?;

        let token = self
            .config
            .token_codec()
            .issue(user.email.as_str(), Some(self.config.access_token_ttl))?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(AuthOutput {
            user,
            profile,
            token,
        })
    }
}
