//! Auth (Identity & Profile Directory) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration for professionals, companies and suppliers (email + password)
//! - Login returning a stateless bearer token
//! - Profile directory: own profile, professional lookup and listing
//! - Rating aggregates stored per profile variant, written by the review module
//!
//! ## Security Model
//! - Passwords hashed with Argon2id plus a server-wide pepper
//! - HS256 session tokens bound to the account email, no server-side sessions
//! - Unknown email and wrong password are reported identically

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
