//! Application Layer
//!
//! Use cases and application services.

pub mod list_reviews;
pub mod recompute_rating;
pub mod submit_review;

// Re-exports
pub use list_reviews::ListReviewsUseCase;
pub use recompute_rating::RecomputeRatingUseCase;
pub use submit_review::SubmitReviewUseCase;
