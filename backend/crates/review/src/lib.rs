//! Review & Rating Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Review entity, rating value object, aggregation, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Append-only reviews with a 1 to 5 star rating
//! - Listings per reviewed user and across the platform, newest first
//! - Rating summary (mean to one decimal, review count) recomputed from all
//!   reviews after each insert and stored on the subject's profile
//!
//! Reading subjects and writing rating summaries goes through the `auth`
//! repository traits.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ReviewError, ReviewResult};
pub use infra::{memory::MemoryReviewRepository, postgres::PgReviewRepository};
pub use presentation::router::{review_router, review_router_generic};
