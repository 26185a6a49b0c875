//! Submit Review Use Case

use std::sync::Arc;

use auth::domain::repository::{ProfileRepository, UserRepository};

use crate::application::recompute_rating::RecomputeRatingUseCase;
use crate::domain::entity::{Review, ReviewDraft};
use crate::domain::repository::ReviewRepository;
use crate::error::{ReviewError, ReviewResult};

/// Submit review use case
pub struct SubmitReviewUseCase<R, U, P>
where
    R: ReviewRepository,
    U: UserRepository,
    P: ProfileRepository,
{
    review_repo: Arc<R>,
    user_repo: Arc<U>,
    profile_repo: Arc<P>,
}

impl<R, U, P> SubmitReviewUseCase<R, U, P>
where
    R: ReviewRepository,
    U: UserRepository,
    P: ProfileRepository,
{
    pub fn new(review_repo: Arc<R>, user_repo: Arc<U>, profile_repo: Arc<P>) -> Self {
        Self {
            review_repo,
            user_repo,
            profile_repo,
        }
    }

    /// Validate, store, then refresh the subject's rating summary
    ///
    /// Once the insert has succeeded the review is returned even if the
    /// recompute fails; the next review for the subject repairs the summary.
    pub async fn execute(&self, draft: ReviewDraft) -> ReviewResult<Review> {
        let review = Review::new(draft)?;

        let subject = self
            .user_repo
            .find_by_id(&review.reviewed_user_id)
            .await?
            .ok_or(ReviewError::NotFound("User"))?;

        self.review_repo.create(&review).await?;

        tracing::info!(
            review_id = %review.review_id,
            reviewed_user_id = %review.reviewed_user_id,
            rating = %review.rating,
            "Review submitted"
        );

        let recompute =
            RecomputeRatingUseCase::new(self.review_repo.clone(), self.profile_repo.clone());
        if let Err(e) = recompute.execute(&subject).await {
            tracing::error!(
                user_id = %subject.user_id,
                error = %e,
                "Rating recompute failed after review insert"
            );
        }

        Ok(review)
    }
}
