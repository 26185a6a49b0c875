//! Review Handlers

use std::sync::Arc;

use auth::domain::repository::{ProfileRepository, UserRepository};
use auth::domain::value_object::UserType;
use axum::{
    Json,
    extract::{Path, State},
};
use kernel::id::UserId;

use crate::application::{ListReviewsUseCase, SubmitReviewUseCase};
use crate::domain::entity::ReviewDraft;
use crate::domain::repository::ReviewRepository;
use crate::error::{ReviewError, ReviewResult};
use crate::presentation::dto::{CreateReviewRequest, ReviewResponse};

/// Review state: the review store plus the identity store it reads subjects
/// from and writes rating summaries to
#[derive(Clone)]
pub struct ReviewAppState<R, I>
where
    R: ReviewRepository + Clone + Send + Sync + 'static,
    I: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    pub reviews: Arc<R>,
    pub identities: Arc<I>,
}

/// POST /api/reviews
pub async fn create_review<R, I>(
    State(state): State<ReviewAppState<R, I>>,
    Json(req): Json<CreateReviewRequest>,
) -> ReviewResult<Json<ReviewResponse>>
where
    R: ReviewRepository + Clone + Send + Sync + 'static,
    I: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let reviewer_type = UserType::from_code(&req.reviewer_type).ok_or_else(|| {
        ReviewError::Validation(format!("Unknown reviewer_type: {}", req.reviewer_type))
    })?;
    let reviewer_user_id: UserId = req
        .reviewer_user_id
        .parse()
        .map_err(|_| ReviewError::Validation("reviewer_user_id must be a UUID".to_string()))?;
    // No user can carry an id that is not a UUID
    let reviewed_user_id: UserId = req
        .reviewed_user_id
        .parse()
        .map_err(|_| ReviewError::NotFound("User"))?;

    let use_case = SubmitReviewUseCase::new(
        state.reviews.clone(),
        state.identities.clone(),
        state.identities.clone(),
    );

    let review = use_case
        .execute(ReviewDraft {
            reviewed_user_id,
            reviewer_user_id,
            reviewer_name: req.reviewer_name,
            reviewer_type,
            rating: req.rating,
            comment: req.comment,
            collaboration_type: req.collaboration_type,
            date_of_service: req.date_of_service,
        })
        .await?;

    Ok(Json(review.into()))
}

/// GET /api/reviews
pub async fn list_recent_reviews<R, I>(
    State(state): State<ReviewAppState<R, I>>,
) -> ReviewResult<Json<Vec<ReviewResponse>>>
where
    R: ReviewRepository + Clone + Send + Sync + 'static,
    I: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListReviewsUseCase::new(state.reviews.clone());
    let reviews = use_case.recent().await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// GET /api/reviews/professional/{user_id}
pub async fn list_subject_reviews<R, I>(
    State(state): State<ReviewAppState<R, I>>,
    Path(user_id): Path<String>,
) -> ReviewResult<Json<Vec<ReviewResponse>>>
where
    R: ReviewRepository + Clone + Send + Sync + 'static,
    I: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let Ok(user_id) = user_id.parse::<UserId>() else {
        return Ok(Json(Vec::new()));
    };

    let use_case = ListReviewsUseCase::new(state.reviews.clone());
    let reviews = use_case.for_subject(&user_id).await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
