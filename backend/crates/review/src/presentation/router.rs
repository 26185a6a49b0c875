//! Review Router
//!
//! Review routes, meant to be nested under `/api` next to the auth router.

use auth::PgAuthRepository;
use auth::domain::repository::{ProfileRepository, UserRepository};
use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::ReviewRepository;
use crate::infra::postgres::PgReviewRepository;
use crate::presentation::handlers::{self, ReviewAppState};

/// Create the Review router with PostgreSQL repositories
pub fn review_router(reviews: PgReviewRepository, identities: PgAuthRepository) -> Router {
    review_router_generic(reviews, identities)
}

/// Create a generic Review router for any repository implementations
pub fn review_router_generic<R, I>(reviews: R, identities: I) -> Router
where
    R: ReviewRepository + Clone + Send + Sync + 'static,
    I: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let state = ReviewAppState {
        reviews: Arc::new(reviews),
        identities: Arc::new(identities),
    };

    Router::new()
        .route(
            "/reviews",
            get(handlers::list_recent_reviews::<R, I>).post(handlers::create_review::<R, I>),
        )
        .route(
            "/reviews/professional/{user_id}",
            get(handlers::list_subject_reviews::<R, I>),
        )
        .with_state(state)
}
