//! Credential Entity
//!
//! Password digest for a user. Kept apart from [`User`](super::user::User)
//! so it never travels with profile data.

use kernel::id::UserId;
use platform::password::PasswordDigest;

#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: UserId,
    pub password: PasswordDigest,
}

impl Credential {
    pub fn new(user_id: UserId, password: PasswordDigest) -> Self {
        Self { user_id, password }
    }
}
