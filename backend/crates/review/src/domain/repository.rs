//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::Review;
use crate::domain::value_object::Rating;
use crate::error::ReviewResult;

/// Upper bound on every review listing
pub const LIST_LIMIT: usize = 100;

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// Append a review
    async fn create(&self, review: &Review) -> ReviewResult<()>;

    /// Reviews received by a user, newest first
    async fn list_for_subject(&self, user_id: &UserId, limit: usize) -> ReviewResult<Vec<Review>>;

    /// All reviews, newest first
    async fn list_recent(&self, limit: usize) -> ReviewResult<Vec<Review>>;

    /// Every rating a user has received, unbounded
    async fn ratings_for_subject(&self, user_id: &UserId) -> ReviewResult<Vec<Rating>>;
}
