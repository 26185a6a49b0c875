//! Domain Layer
//!
//! Review entity, rating value object, aggregation and repository traits.

pub mod aggregate;
pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{Review, ReviewDraft};
pub use repository::ReviewRepository;
pub use value_object::Rating;
