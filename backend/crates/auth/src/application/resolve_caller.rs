//! Resolve Caller Use Case
//!
//! Maps a bearer token to the user it was issued for.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Resolve caller use case
pub struct ResolveCallerUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ResolveCallerUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let subject = self.config.token_codec().resolve(token)?;

        // The subject was lower-cased at issue time
        let email = Email::from_db(subject);

        self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }
}
