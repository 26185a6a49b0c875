//! List Reviews Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::Review;
use crate::domain::repository::{LIST_LIMIT, ReviewRepository};
use crate::error::ReviewResult;

/// Review listings, newest first and capped at [`LIST_LIMIT`]
pub struct ListReviewsUseCase<R>
where
    R: ReviewRepository,
{
    review_repo: Arc<R>,
}

impl<R> ListReviewsUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repo: Arc<R>) -> Self {
        Self { review_repo }
    }

    /// Reviews received by one user; unknown users yield an empty list
    pub async fn for_subject(&self, user_id: &UserId) -> ReviewResult<Vec<Review>> {
        self.review_repo.list_for_subject(user_id, LIST_LIMIT).await
    }

    /// Most recent reviews across all users
    pub async fn recent(&self) -> ReviewResult<Vec<Review>> {
        self.review_repo.list_recent(LIST_LIMIT).await
    }
}
