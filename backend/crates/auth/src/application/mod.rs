//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod get_profile;
pub mod list_professionals;
pub mod register;
pub mod resolve_caller;
pub mod update_profile;

use platform::token::IssuedToken;

use crate::domain::entity::{Profile, User};

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateUseCase};
pub use config::AuthConfig;
pub use get_profile::{GetProfileUseCase, ProfileView};
pub use list_professionals::ListProfessionalsUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use resolve_caller::ResolveCallerUseCase;
pub use update_profile::{UpdateProfileInput, UpdateProfileUseCase};

/// Result of a successful register or login
#[derive(Debug, Clone)]
pub struct AuthOutput {
    pub user: User,
    pub profile: Option<Profile>,
    pub token: IssuedToken,
}
