//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Credential, Profile, ProfileDetails, RatingSummary, User};
pub use repository::{ProfessionalFilter, ProfileRepository, UserRepository};
pub use value_object::{Email, UserType};
