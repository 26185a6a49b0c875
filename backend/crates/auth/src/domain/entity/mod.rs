//! Entity Module

pub mod credential;
pub mod profile;
pub mod user;

pub use credential::Credential;
pub use profile::{
    CompanyDetails, ProfessionalDetails, Profile, ProfileDetails, ProfileDraft, ProfilePatch,
    RatingSummary, SupplierDetails,
};
pub use user::{User, UserPatch};
