//! Review DTOs

use auth::domain::value_object::UserType;
use chrono::{DateTime, Utc};
use kernel::id::{ReviewId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::Review;
use crate::domain::value_object::Rating;

/// POST /reviews body
///
/// Identifiers and the reviewer type arrive as strings so that bad values
/// map to domain errors instead of extractor rejections.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub reviewed_user_id: String,
    pub reviewer_user_id: String,
    pub reviewer_name: String,
    pub reviewer_type: String,
    pub rating: i64,
    pub comment: String,
    #[serde(default)]
    pub collaboration_type: Option<String>,
    #[serde(default)]
    pub date_of_service: Option<DateTime<Utc>>,
}

/// Review as returned to clients
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub reviewed_user_id: UserId,
    pub reviewer_user_id: UserId,
    pub reviewer_name: String,
    pub reviewer_type: UserType,
    pub rating: Rating,
    pub comment: String,
    pub collaboration_type: Option<String>,
    pub date_of_service: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.review_id,
            reviewed_user_id: review.reviewed_user_id,
            reviewer_user_id: review.reviewer_user_id,
            reviewer_name: review.reviewer_name,
            reviewer_type: review.reviewer_type,
            rating: review.rating,
            comment: review.comment,
            collaboration_type: review.collaboration_type,
            date_of_service: review.date_of_service,
            created_at: review.created_at,
        }
    }
}
