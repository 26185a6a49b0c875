//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire.

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::{AuthOutput, ProfileView};
use crate::domain::entity::{Profile, ProfileDetails, ProfileDraft, ProfilePatch, User, UserPatch};
use crate::domain::value_object::{AvailabilityStatus, UserType};

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Flat: carries the fields of every profile variant, only those of
/// `user_type` are used. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Defaults to `professional`
    pub user_type: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    pub location: Option<String>,

    // professional
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub experience_years: i64,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub areas_of_expertise: Vec<String>,

    // company / supplier
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub services_offered: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub products_services: Vec<String>,
}

impl RegisterRequest {
    /// Split off the profile fields
    pub fn take_profile_draft(&mut self) -> ProfileDraft {
        ProfileDraft {
            specialties: std::mem::take(&mut self.specialties),
            experience_years: self.experience_years,
            bio: std::mem::take(&mut self.bio),
            education: std::mem::take(&mut self.education),
            certifications: std::mem::take(&mut self.certifications),
            hourly_rate: self.hourly_rate,
            skills: std::mem::take(&mut self.skills),
            areas_of_expertise: std::mem::take(&mut self.areas_of_expertise),
            company_name: self.company_name.take(),
            company_type: std::mem::take(&mut self.company_type),
            description: std::mem::take(&mut self.description),
            size: std::mem::take(&mut self.size),
            services_offered: std::mem::take(&mut self.services_offered),
            requirements: std::mem::take(&mut self.requirements),
            products_services: std::mem::take(&mut self.products_services),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Shared responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub user_type: UserType,
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            email: user.email.into_db(),
            user_type: user.user_type,
            full_name: user.full_name,
            phone: user.phone,
            location: user.location,
            profile_image: user.profile_image,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Profile record as stored
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: ProfileId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub details: ProfileDetails,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.profile_id,
            user_id: profile.user_id,
            details: profile.details,
            average_rating: profile.rating.average_rating,
            total_reviews: profile.rating.total_reviews,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Register / login response
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserResponse,
    pub profile: Option<ProfileResponse>,
}

impl From<AuthOutput> for AuthResponse {
    fn from(output: AuthOutput) -> Self {
        Self {
            access_token: output.token.token,
            token_type: "bearer",
            user: output.user.into(),
            profile: output.profile.map(Into::into),
        }
    }
}

// ============================================================================
// Profile view (user merged with profile)
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub profile_id: ProfileId,
    #[serde(flatten)]
    pub details: ProfileDetails,
    pub average_rating: f64,
    pub total_reviews: u32,
}

/// User fields and profile fields in one flat object
#[derive(Debug, Clone, Serialize)]
pub struct ProfileViewResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(flatten)]
    pub profile: Option<ProfileSummary>,
}

impl From<ProfileView> for ProfileViewResponse {
    fn from(view: ProfileView) -> Self {
        Self {
            user: view.user.into(),
            profile: view.profile.map(|p| ProfileSummary {
                profile_id: p.profile_id,
                details: p.details,
                average_rating: p.rating.average_rating,
                total_reviews: p.rating.total_reviews,
            }),
        }
    }
}

// ============================================================================
// Profile update
// ============================================================================

/// Partial profile update; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,

    pub specialties: Option<Vec<String>>,
    pub experience_years: Option<i64>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<Vec<String>>,
    /// Absent keeps the rate, `null` clears it
    #[serde(default, deserialize_with = "present")]
    pub hourly_rate: Option<Option<f64>>,
    pub skills: Option<Vec<String>>,
    pub areas_of_expertise: Option<Vec<String>>,
    pub availability_status: Option<AvailabilityStatus>,

    pub company_name: Option<String>,
    pub company_type: Option<String>,
    pub description: Option<String>,
    pub size: Option<String>,
    pub services_offered: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub products_services: Option<Vec<String>>,
}

impl UpdateProfileRequest {
    pub fn into_patches(self) -> (UserPatch, ProfilePatch) {
        let user = UserPatch {
            full_name: self.full_name,
            phone: self.phone,
            location: self.location,
            profile_image: self.profile_image,
        };
        let profile = ProfilePatch {
            specialties: self.specialties,
            experience_years: self.experience_years,
            bio: self.bio,
            education: self.education,
            certifications: self.certifications,
            hourly_rate: self.hourly_rate,
            skills: self.skills,
            areas_of_expertise: self.areas_of_expertise,
            availability_status: self.availability_status,
            company_name: self.company_name,
            company_type: self.company_type,
            description: self.description,
            size: self.size,
            services_offered: self.services_offered,
            requirements: self.requirements,
            products_services: self.products_services,
        };
        (user, profile)
    }
}

/// Marks a field as present, so an explicit `null` becomes `Some(None)`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Directory
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfessionalsQuery {
    pub specialty: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecialtiesResponse {
    pub specialties: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
