//! List Professionals Use Case

use std::sync::Arc;

use crate::application::get_profile::ProfileView;
use crate::domain::repository::{LIST_LIMIT, ProfessionalFilter, ProfileRepository};
use crate::error::AuthResult;

pub struct ListProfessionalsUseCase<P>
where
    P: ProfileRepository,
{
    profile_repo: Arc<P>,
}

impl<P> ListProfessionalsUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profile_repo: Arc<P>) -> Self {
        Self { profile_repo }
    }

    /// Up to [`LIST_LIMIT`] professionals matching the filter
    pub async fn execute(&self, filter: ProfessionalFilter) -> AuthResult<Vec<ProfileView>> {
        let filter = ProfessionalFilter {
            specialty: filter.specialty.filter(|s| !s.trim().is_empty()),
            location: filter
                .location
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
        };

        let rows = self
            .profile_repo
            .list_professionals(&filter, LIST_LIMIT)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user, profile)| ProfileView {
                user,
                profile: Some(profile),
            })
            .collect())
    }
}
