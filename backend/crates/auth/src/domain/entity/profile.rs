//! Profile Entity
//!
//! Each user owns at most one profile, of the variant matching its
//! [`UserType`]. The rating summary is derived from reviews and is only ever
//! written through `ProfileRepository::update_rating`.

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};
use serde::Serialize;

use crate::domain::value_object::{AvailabilityStatus, UserType};
use crate::error::{AuthError, AuthResult};

/// Aggregate of all reviews received by a user
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal
    pub average_rating: f64,
    pub total_reviews: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionalDetails {
    pub specialties: Vec<String>,
    pub experience_years: u32,
    pub bio: String,
    pub education: String,
    pub certifications: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub availability_status: AvailabilityStatus,
    pub skills: Vec<String>,
    pub areas_of_expertise: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetails {
    pub company_name: String,
    /// hospital, clinic, medical_center...
    pub company_type: String,
    pub description: String,
    pub size: String,
    pub services_offered: Vec<String>,
    pub requirements: Vec<String>,
}

/// Supplier attributes. The three scores are not client-authored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierDetails {
    pub company_name: String,
    pub products_services: Vec<String>,
    pub description: String,
    pub certifications: Vec<String>,
    pub quality_score: f64,
    pub reliability_score: f64,
    pub competitiveness_score: f64,
}

/// Variant-specific profile attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileDetails {
    Professional(ProfessionalDetails),
    Company(CompanyDetails),
    Supplier(SupplierDetails),
}

/// Profile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub profile_id: ProfileId,
    pub user_id: UserId,
    pub details: ProfileDetails,
    pub rating: RatingSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration-time profile fields, for any variant
///
/// Only the fields of the selected variant are read.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub specialties: Vec<String>,
    pub experience_years: i64,
    pub bio: String,
    pub education: String,
    pub certifications: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub skills: Vec<String>,
    pub areas_of_expertise: Vec<String>,
    pub company_name: Option<String>,
    pub company_type: String,
    pub description: String,
    pub size: String,
    pub services_offered: Vec<String>,
    pub requirements: Vec<String>,
    pub products_services: Vec<String>,
}

/// Partial profile update; fields outside the caller's variant are ignored
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    // professional
    pub specialties: Option<Vec<String>>,
    pub experience_years: Option<i64>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<Vec<String>>,
    /// `Some(None)` clears the rate
    pub hourly_rate: Option<Option<f64>>,
    pub skills: Option<Vec<String>>,
    pub areas_of_expertise: Option<Vec<String>>,
    pub availability_status: Option<AvailabilityStatus>,
    // company / supplier
    pub company_name: Option<String>,
    pub company_type: Option<String>,
    pub description: Option<String>,
    pub size: Option<String>,
    pub services_offered: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub products_services: Option<Vec<String>>,
}

impl ProfileDetails {
    /// Build the variant selected by `user_type` from registration input
    pub fn from_draft(user_type: UserType, draft: ProfileDraft) -> AuthResult<Self> {
        let details = match user_type {
            UserType::Professional => ProfileDetails::Professional(ProfessionalDetails {
                specialties: clean_list(draft.specialties),
                experience_years: experience_years(draft.experience_years)?,
                bio: draft.bio.trim().to_string(),
                education: draft.education.trim().to_string(),
                certifications: clean_list(draft.certifications),
                hourly_rate: hourly_rate(draft.hourly_rate)?,
                availability_status: AvailabilityStatus::default(),
                skills: clean_list(draft.skills),
                areas_of_expertise: clean_list(draft.areas_of_expertise),
            }),
            UserType::Company => ProfileDetails::Company(CompanyDetails {
                company_name: company_name(draft.company_name.as_deref())?,
                company_type: draft.company_type.trim().to_string(),
                description: draft.description.trim().to_string(),
                size: draft.size.trim().to_string(),
                services_offered: clean_list(draft.services_offered),
                requirements: clean_list(draft.requirements),
            }),
            UserType::Supplier => ProfileDetails::Supplier(SupplierDetails {
                company_name: company_name(draft.company_name.as_deref())?,
                products_services: clean_list(draft.products_services),
                description: draft.description.trim().to_string(),
                certifications: clean_list(draft.certifications),
                quality_score: 0.0,
                reliability_score: 0.0,
                competitiveness_score: 0.0,
            }),
        };
        Ok(details)
    }

    pub fn user_type(&self) -> UserType {
        match self {
            ProfileDetails::Professional(_) => UserType::Professional,
            ProfileDetails::Company(_) => UserType::Company,
            ProfileDetails::Supplier(_) => UserType::Supplier,
        }
    }

    /// Apply the patch fields belonging to this variant
    ///
    /// Validation runs before any field is written, so a rejected patch
    /// leaves the details untouched. Returns whether anything changed.
    pub fn apply(&mut self, patch: ProfilePatch) -> AuthResult<bool> {
        match self {
            ProfileDetails::Professional(p) => {
                let years = patch.experience_years.map(experience_years).transpose()?;
                let rate = patch.hourly_rate.map(hourly_rate).transpose()?;

                let mut changed = false;
                changed |= set(&mut p.specialties, patch.specialties.map(clean_list));
                changed |= set(&mut p.experience_years, years);
                changed |= set(&mut p.bio, patch.bio.map(trimmed));
                changed |= set(&mut p.education, patch.education.map(trimmed));
                changed |= set(&mut p.certifications, patch.certifications.map(clean_list));
                changed |= set(&mut p.hourly_rate, rate);
                changed |= set(&mut p.skills, patch.skills.map(clean_list));
                changed |= set(
                    &mut p.areas_of_expertise,
                    patch.areas_of_expertise.map(clean_list),
                );
                changed |= set(&mut p.availability_status, patch.availability_status);
                Ok(changed)
            }
            ProfileDetails::Company(c) => {
                let name = patch
                    .company_name
                    .as_deref()
                    .map(|n| company_name(Some(n)))
                    .transpose()?;

                let mut changed = false;
                changed |= set(&mut c.company_name, name);
                changed |= set(&mut c.company_type, patch.company_type.map(trimmed));
                changed |= set(&mut c.description, patch.description.map(trimmed));
                changed |= set(&mut c.size, patch.size.map(trimmed));
                changed |= set(&mut c.services_offered, patch.services_offered.map(clean_list));
                changed |= set(&mut c.requirements, patch.requirements.map(clean_list));
                Ok(changed)
            }
            ProfileDetails::Supplier(s) => {
                let name = patch
                    .company_name
                    .as_deref()
                    .map(|n| company_name(Some(n)))
                    .transpose()?;

                let mut changed = false;
                changed |= set(&mut s.company_name, name);
                changed |= set(
                    &mut s.products_services,
                    patch.products_services.map(clean_list),
                );
                changed |= set(&mut s.description, patch.description.map(trimmed));
                changed |= set(&mut s.certifications, patch.certifications.map(clean_list));
                Ok(changed)
            }
        }
    }
}

impl Profile {
    /// Create a profile with empty rating aggregates
    pub fn new(user_id: UserId, details: ProfileDetails) -> Self {
        let now = Utc::now();
        Self {
            profile_id: ProfileId::new(),
            user_id,
            details,
            rating: RatingSummary::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn user_type(&self) -> UserType {
        self.details.user_type()
    }

    pub fn as_professional(&self) -> Option<&ProfessionalDetails> {
        match &self.details {
            ProfileDetails::Professional(p) => Some(p),
            _ => None,
        }
    }

    /// Apply a patch to the variant fields; bumps `updated_at` on change
    pub fn apply(&mut self, patch: ProfilePatch) -> AuthResult<bool> {
        let changed = self.details.apply(patch)?;
        if changed {
            self.updated_at = Utc::now();
        }
        Ok(changed)
    }
}

// ============================================================================
// Field validation
// ============================================================================

fn set<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(v) if *slot != v => {
            *slot = v;
            true
        }
        _ => false,
    }
}

fn trimmed(s: String) -> String {
    s.trim().to_string()
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(trimmed)
        .filter(|s| !s.is_empty())
        .collect()
}

fn experience_years(years: i64) -> AuthResult<u32> {
    u32::try_from(years)
        .ok()
        .filter(|y| *y <= 80)
        .ok_or_else(|| {
            AuthError::Validation("experience_years must be between 0 and 80".to_string())
        })
}

fn hourly_rate(rate: Option<f64>) -> AuthResult<Option<f64>> {
    match rate {
        Some(r) if !r.is_finite() || r < 0.0 => Err(AuthError::Validation(
            "hourly_rate must be a non-negative number".to_string(),
        )),
        other => Ok(other),
    }
}

fn company_name(name: Option<&str>) -> AuthResult<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AuthError::Validation("company_name is required".to_string()))
}
