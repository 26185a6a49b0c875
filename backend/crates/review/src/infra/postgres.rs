//! PostgreSQL Review Repository

use auth::domain::value_object::UserType;
use chrono::{DateTime, Utc};
use kernel::id::{ReviewId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Review;
use crate::domain::repository::ReviewRepository;
use crate::domain::value_object::Rating;
use crate::error::{ReviewError, ReviewResult};

/// PostgreSQL-backed review repository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const REVIEW_COLUMNS: &str = r#"
    review_id,
    reviewed_user_id,
    reviewer_user_id,
    reviewer_name,
    reviewer_type,
    rating,
    comment,
    collaboration_type,
    date_of_service,
    created_at
"#;

impl ReviewRepository for PgReviewRepository {
    async fn create(&self, review: &Review) -> ReviewResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reviews (
                review_id,
                reviewed_user_id,
                reviewer_user_id,
                reviewer_name,
                reviewer_type,
                rating,
                comment,
                collaboration_type,
                date_of_service,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.reviewed_user_id.as_uuid())
        .bind(review.reviewer_user_id.as_uuid())
        .bind(&review.reviewer_name)
        .bind(review.reviewer_type.code())
        .bind(i16::from(review.rating.value()))
        .bind(&review.comment)
        .bind(&review.collaboration_type)
        .bind(review.date_of_service)
        .bind(review.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_subject(&self, user_id: &UserId, limit: usize) -> ReviewResult<Vec<Review>> {
        let sql = format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews
             WHERE reviewed_user_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(user_id.as_uuid())
            .bind(limit_to_db(limit))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ReviewRow::into_review).collect()
    }

    async fn list_recent(&self, limit: usize) -> ReviewResult<Vec<Review>> {
        let sql = format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews
             ORDER BY created_at DESC
             LIMIT $1"
        );
        let rows = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(limit_to_db(limit))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ReviewRow::into_review).collect()
    }

    async fn ratings_for_subject(&self, user_id: &UserId) -> ReviewResult<Vec<Rating>> {
        let rows: Vec<(i16,)> =
            sqlx::query_as("SELECT rating FROM reviews WHERE reviewed_user_id = $1")
                .bind(user_id.as_uuid())
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|(rating,)| rating_from_db(rating))
            .collect()
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ReviewRow {
    review_id: Uuid,
    reviewed_user_id: Uuid,
    reviewer_user_id: Uuid,
    reviewer_name: String,
    reviewer_type: String,
    rating: i16,
    comment: String,
    collaboration_type: Option<String>,
    date_of_service: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> ReviewResult<Review> {
        let reviewer_type = UserType::from_code(&self.reviewer_type).ok_or_else(|| {
            ReviewError::Internal(format!("Invalid reviewer_type: {}", self.reviewer_type))
        })?;

        Ok(Review {
            review_id: ReviewId::from_uuid(self.review_id),
            reviewed_user_id: UserId::from_uuid(self.reviewed_user_id),
            reviewer_user_id: UserId::from_uuid(self.reviewer_user_id),
            reviewer_name: self.reviewer_name,
            reviewer_type,
            rating: rating_from_db(self.rating)?,
            comment: self.comment,
            collaboration_type: self.collaboration_type,
            date_of_service: self.date_of_service,
            created_at: self.created_at,
        })
    }
}

fn rating_from_db(rating: i16) -> ReviewResult<Rating> {
    Rating::new(i64::from(rating))
        .map_err(|_| ReviewError::Internal(format!("Invalid stored rating: {rating}")))
}

fn limit_to_db(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
