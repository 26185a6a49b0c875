//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `auth` and `review` crates:
//! - Common error types and result aliases
//! - Typed identifiers for users, profiles and reviews
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
