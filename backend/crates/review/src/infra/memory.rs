//! In-memory Review Repository
//!
//! Same contract as the PostgreSQL repository, kept in process memory.

use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::Review;
use crate::domain::repository::ReviewRepository;
use crate::domain::value_object::Rating;
use crate::error::ReviewResult;

/// In-memory review repository; clones share the same storage
#[derive(Clone, Default)]
pub struct MemoryReviewRepository {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl MemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reviews
    pub async fn len(&self) -> usize {
        self.reviews.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reviews.read().await.is_empty()
    }
}

/// Newest first; insertion order breaks ties so later inserts come first
fn newest_first<'a>(reviews: impl DoubleEndedIterator<Item = &'a Review>, limit: usize) -> Vec<Review> {
    let mut sorted: Vec<Review> = reviews.rev().cloned().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

impl ReviewRepository for MemoryReviewRepository {
    async fn create(&self, review: &Review) -> ReviewResult<()> {
        self.reviews.write().await.push(review.clone());
        Ok(())
    }

    async fn list_for_subject(&self, user_id: &UserId, limit: usize) -> ReviewResult<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(newest_first(
            reviews.iter().filter(|r| &r.reviewed_user_id == user_id),
            limit,
        ))
    }

    async fn list_recent(&self, limit: usize) -> ReviewResult<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(newest_first(reviews.iter(), limit))
    }

    async fn ratings_for_subject(&self, user_id: &UserId) -> ReviewResult<Vec<Rating>> {
        Ok(self
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| &r.reviewed_user_id == user_id)
            .map(|r| r.rating)
            .collect())
    }
}
