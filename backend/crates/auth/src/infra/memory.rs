//! In-memory Repository Implementations
//!
//! Same contract as the PostgreSQL repository, kept in process memory.
//! Used by tests and local runs without a database.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::{Credential, Profile, RatingSummary, User};
use crate::domain::repository::{ProfessionalFilter, ProfileRepository, UserRepository};
use crate::domain::value_object::{Email, UserType};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    credentials: HashMap<UserId, Credential>,
    /// One map per variant, keyed by owner
    profiles: HashMap<(UserType, UserId), Profile>,
}

/// In-memory auth repository; clones share the same storage
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateIdentity);
        }

        tables.users.insert(user.user_id, user.clone());
        tables.credentials.insert(user.user_id, credential.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.tables.read().await.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_credential(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self.tables.read().await.credentials.get(user_id).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .any(|u| &u.email == email))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(stored) = tables.users.get_mut(&user.user_id) {
            stored.full_name = user.full_name.clone();
            stored.phone = user.phone.clone();
            stored.location = user.location.clone();
            stored.profile_image = user.profile_image.clone();
            stored.updated_at = user.updated_at;
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        tables.users.remove(user_id);
        tables.credentials.remove(user_id);
        tables.profiles.retain(|(_, owner), _| owner != user_id);
        Ok(())
    }
}

impl ProfileRepository for MemoryAuthRepository {
    async fn create(&self, profile: &Profile) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        let key = (profile.user_type(), profile.user_id);

        if tables.profiles.contains_key(&key) {
            return Err(AuthError::Validation(
                "Profile already exists for this user".to_string(),
            ));
        }

        tables.profiles.insert(key, profile.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        user_type: UserType,
    ) -> AuthResult<Option<Profile>> {
        Ok(self
            .tables
            .read()
            .await
            .profiles
            .get(&(user_type, *user_id))
            .cloned())
    }

    async fn update(&self, profile: &Profile) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(stored) = tables
            .profiles
            .get_mut(&(profile.user_type(), profile.user_id))
        {
            stored.details = profile.details.clone();
            stored.updated_at = profile.updated_at;
        }
        Ok(())
    }

    async fn update_rating(
        &self,
        user_id: &UserId,
        user_type: UserType,
        rating: RatingSummary,
    ) -> AuthResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.profiles.get_mut(&(user_type, *user_id)) {
            Some(stored) => {
                stored.rating = rating;
                stored.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_professionals(
        &self,
        filter: &ProfessionalFilter,
        limit: usize,
    ) -> AuthResult<Vec<(User, Profile)>> {
        let tables = self.tables.read().await;

        let mut rows: Vec<(User, Profile)> = tables
            .profiles
            .iter()
            .filter(|((user_type, _), _)| *user_type == UserType::Professional)
            .filter_map(|((_, owner), profile)| {
                let user = tables.users.get(owner)?;
                filter
                    .matches(user, profile)
                    .then(|| (user.clone(), profile.clone()))
            })
            .collect();

        rows.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));
        rows.truncate(limit);
        Ok(rows)
    }
}
