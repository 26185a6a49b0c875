//! Recompute Rating Use Case
//!
//! Rebuilds a subject's rating summary from every review it has received
//! and writes it to the profile matching the subject's user type.

use std::sync::Arc;

use auth::domain::entity::{RatingSummary, User};
use auth::domain::repository::ProfileRepository;

use crate::domain::aggregate;
use crate::domain::repository::ReviewRepository;
use crate::error::ReviewResult;

/// Recompute rating use case
pub struct RecomputeRatingUseCase<R, P>
where
    R: ReviewRepository,
    P: ProfileRepository,
{
    review_repo: Arc<R>,
    profile_repo: Arc<P>,
}

impl<R, P> RecomputeRatingUseCase<R, P>
where
    R: ReviewRepository,
    P: ProfileRepository,
{
    pub fn new(review_repo: Arc<R>, profile_repo: Arc<P>) -> Self {
        Self {
            review_repo,
            profile_repo,
        }
    }

    /// Returns the summary written, or `None` when the subject has no reviews
    pub async fn execute(&self, subject: &User) -> ReviewResult<Option<RatingSummary>> {
        let ratings = self
            .review_repo
            .ratings_for_subject(&subject.user_id)
            .await?;

        let Some(summary) = aggregate::summarize(&ratings) else {
            return Ok(None);
        };

        let updated = self
            .profile_repo
            .update_rating(&subject.user_id, subject.user_type, summary)
            .await?;

        if updated {
            tracing::debug!(
                user_id = %subject.user_id,
                average_rating = summary.average_rating,
                total_reviews = summary.total_reviews,
                "Rating recomputed"
            );
        } else {
            tracing::warn!(
                user_id = %subject.user_id,
                user_type = %subject.user_type,
                "Reviewed user has no profile, rating not stored"
            );
        }

        Ok(Some(summary))
    }
}
