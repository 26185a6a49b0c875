//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};
use platform::password::PasswordDigest;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    CompanyDetails, Credential, ProfessionalDetails, Profile, ProfileDetails, RatingSummary,
    SupplierDetails, User,
};
use crate::domain::repository::{ProfessionalFilter, ProfileRepository, UserRepository};
use crate::domain::value_object::{AvailabilityStatus, Email, UserType};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = r#"
    user_id,
    email,
    user_type,
    full_name,
    phone,
    location,
    profile_image,
    created_at,
    updated_at
"#;

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                password_hash,
                user_type,
                full_name,
                phone,
                location,
                profile_image,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(credential.password.as_phc_string())
        .bind(user.user_type.code())
        .bind(&user.full_name)
        .bind(&user.phone)
        .bind(&user.location)
        .bind(&user.profile_image)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::DuplicateIdentity,
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_credential(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT user_id, password_hash FROM users WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialRow::into_credential).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                full_name = $2,
                phone = $3,
                location = $4,
                profile_image = $5,
                updated_at = $6
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.full_name)
        .bind(&user.phone)
        .bind(&user.location)
        .bind(&user.profile_image)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for PgAuthRepository {
    async fn create(&self, profile: &Profile) -> AuthResult<()> {
        let query = match &profile.details {
            ProfileDetails::Professional(p) => sqlx::query(
                r#"
                INSERT INTO professionals (
                    profile_id,
                    user_id,
                    specialties,
                    experience_years,
                    bio,
                    education,
                    certifications,
                    hourly_rate,
                    availability_status,
                    skills,
                    areas_of_expertise,
                    average_rating,
                    total_reviews,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                "#,
            )
            .bind(profile.profile_id.as_uuid())
            .bind(profile.user_id.as_uuid())
            .bind(&p.specialties)
            .bind(years_to_db(p.experience_years))
            .bind(&p.bio)
            .bind(&p.education)
            .bind(&p.certifications)
            .bind(p.hourly_rate)
            .bind(p.availability_status.code())
            .bind(&p.skills)
            .bind(&p.areas_of_expertise),
            ProfileDetails::Company(c) => sqlx::query(
                r#"
                INSERT INTO companies (
                    profile_id,
                    user_id,
                    company_name,
                    company_type,
                    description,
                    size,
                    services_offered,
                    requirements,
                    average_rating,
                    total_reviews,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#,
            )
            .bind(profile.profile_id.as_uuid())
            .bind(profile.user_id.as_uuid())
            .bind(&c.company_name)
            .bind(&c.company_type)
            .bind(&c.description)
            .bind(&c.size)
            .bind(&c.services_offered)
            .bind(&c.requirements),
            ProfileDetails::Supplier(s) => sqlx::query(
                r#"
                INSERT INTO suppliers (
                    profile_id,
                    user_id,
                    company_name,
                    products_services,
                    description,
                    certifications,
                    quality_score,
                    reliability_score,
                    competitiveness_score,
                    average_rating,
                    total_reviews,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                "#,
            )
            .bind(profile.profile_id.as_uuid())
            .bind(profile.user_id.as_uuid())
            .bind(&s.company_name)
            .bind(&s.products_services)
            .bind(&s.description)
            .bind(&s.certifications)
            .bind(s.quality_score)
            .bind(s.reliability_score)
            .bind(s.competitiveness_score),
        };

        query
            .bind(profile.rating.average_rating)
            .bind(reviews_to_db(profile.rating.total_reviews))
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        user_type: UserType,
    ) -> AuthResult<Option<Profile>> {
        match user_type {
            UserType::Professional => {
                let row = sqlx::query_as::<_, ProfessionalRow>(
                    "SELECT * FROM professionals WHERE user_id = $1",
                )
                .bind(user_id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;
                row.map(ProfessionalRow::into_profile).transpose()
            }
            UserType::Company => {
                let row =
                    sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE user_id = $1")
                        .bind(user_id.as_uuid())
                        .fetch_optional(&self.pool)
                        .await?;
                row.map(CompanyRow::into_profile).transpose()
            }
            UserType::Supplier => {
                let row =
                    sqlx::query_as::<_, SupplierRow>("SELECT * FROM suppliers WHERE user_id = $1")
                        .bind(user_id.as_uuid())
                        .fetch_optional(&self.pool)
                        .await?;
                row.map(SupplierRow::into_profile).transpose()
            }
        }
    }

    async fn update(&self, profile: &Profile) -> AuthResult<()> {
        let query = match &profile.details {
            ProfileDetails::Professional(p) => sqlx::query(
                r#"
                UPDATE professionals SET
                    specialties = $2,
                    experience_years = $3,
                    bio = $4,
                    education = $5,
                    certifications = $6,
                    hourly_rate = $7,
                    availability_status = $8,
                    skills = $9,
                    areas_of_expertise = $10,
                    updated_at = $11
                WHERE user_id = $1
                "#,
            )
            .bind(profile.user_id.as_uuid())
            .bind(&p.specialties)
            .bind(years_to_db(p.experience_years))
            .bind(&p.bio)
            .bind(&p.education)
            .bind(&p.certifications)
            .bind(p.hourly_rate)
            .bind(p.availability_status.code())
            .bind(&p.skills)
            .bind(&p.areas_of_expertise),
            ProfileDetails::Company(c) => sqlx::query(
                r#"
                UPDATE companies SET
                    company_name = $2,
                    company_type = $3,
                    description = $4,
                    size = $5,
                    services_offered = $6,
                    requirements = $7,
                    updated_at = $8
                WHERE user_id = $1
                "#,
            )
            .bind(profile.user_id.as_uuid())
            .bind(&c.company_name)
            .bind(&c.company_type)
            .bind(&c.description)
            .bind(&c.size)
            .bind(&c.services_offered)
            .bind(&c.requirements),
            ProfileDetails::Supplier(s) => sqlx::query(
                r#"
                UPDATE suppliers SET
                    company_name = $2,
                    products_services = $3,
                    description = $4,
                    certifications = $5,
                    updated_at = $6
                WHERE user_id = $1
                "#,
            )
            .bind(profile.user_id.as_uuid())
            .bind(&s.company_name)
            .bind(&s.products_services)
            .bind(&s.description)
            .bind(&s.certifications),
        };

        query.bind(profile.updated_at).execute(&self.pool).await?;

        Ok(())
    }

    async fn update_rating(
        &self,
        user_id: &UserId,
        user_type: UserType,
        rating: RatingSummary,
    ) -> AuthResult<bool> {
        let sql = match user_type {
            UserType::Professional => {
                "UPDATE professionals SET average_rating = $2, total_reviews = $3, updated_at = $4 WHERE user_id = $1"
            }
            UserType::Company => {
                "UPDATE companies SET average_rating = $2, total_reviews = $3, updated_at = $4 WHERE user_id = $1"
            }
            UserType::Supplier => {
                "UPDATE suppliers SET average_rating = $2, total_reviews = $3, updated_at = $4 WHERE user_id = $1"
            }
        };

        let affected = sqlx::query(sql)
            .bind(user_id.as_uuid())
            .bind(rating.average_rating)
            .bind(reviews_to_db(rating.total_reviews))
            .bind(Utc::now())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn list_professionals(
        &self,
        filter: &ProfessionalFilter,
        limit: usize,
    ) -> AuthResult<Vec<(User, Profile)>> {
        let rows = sqlx::query_as::<_, ProfessionalListingRow>(
            r#"
            SELECT
                u.user_id,
                u.email,
                u.user_type,
                u.full_name,
                u.phone,
                u.location,
                u.profile_image,
                u.created_at,
                u.updated_at,
                p.profile_id,
                p.specialties,
                p.experience_years,
                p.bio,
                p.education,
                p.certifications,
                p.hourly_rate,
                p.availability_status,
                p.skills,
                p.areas_of_expertise,
                p.average_rating,
                p.total_reviews,
                p.created_at AS profile_created_at,
                p.updated_at AS profile_updated_at
            FROM professionals p
            JOIN users u ON u.user_id = p.user_id
            WHERE ($1::TEXT IS NULL OR $1 = ANY(p.specialties))
              AND ($2::TEXT IS NULL OR strpos(lower(u.location), lower($2)) > 0)
            ORDER BY p.created_at DESC
            LIMIT $3
            "#,
        )
        .bind(filter.specialty.as_deref())
        .bind(filter.location.as_deref())
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(ProfessionalListingRow::into_pair)
            .collect()
    }
}

// ============================================================================
// Row types for sqlx
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    user_type: String,
    full_name: String,
    phone: String,
    location: String,
    profile_image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_type = UserType::from_code(&self.user_type).ok_or_else(|| {
            AuthError::Internal(format!("Invalid user_type: {}", self.user_type))
        })?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            user_type,
            full_name: self.full_name,
            phone: self.phone,
            location: self.location,
            profile_image: self.profile_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    user_id: Uuid,
    password_hash: String,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<Credential> {
        let password = PasswordDigest::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?;

        Ok(Credential::new(UserId::from_uuid(self.user_id), password))
    }
}

#[derive(sqlx::FromRow)]
struct ProfessionalRow {
    profile_id: Uuid,
    user_id: Uuid,
    specialties: Vec<String>,
    experience_years: i32,
    bio: String,
    education: String,
    certifications: Vec<String>,
    hourly_rate: Option<f64>,
    availability_status: String,
    skills: Vec<String>,
    areas_of_expertise: Vec<String>,
    average_rating: f64,
    total_reviews: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfessionalRow {
    fn into_profile(self) -> AuthResult<Profile> {
        let availability_status = AvailabilityStatus::from_code(&self.availability_status)
            .ok_or_else(|| {
                AuthError::Internal(format!(
                    "Invalid availability_status: {}",
                    self.availability_status
                ))
            })?;

        Ok(Profile {
            profile_id: ProfileId::from_uuid(self.profile_id),
            user_id: UserId::from_uuid(self.user_id),
            details: ProfileDetails::Professional(ProfessionalDetails {
                specialties: self.specialties,
                experience_years: u32::try_from(self.experience_years).unwrap_or_default(),
                bio: self.bio,
                education: self.education,
                certifications: self.certifications,
                hourly_rate: self.hourly_rate,
                availability_status,
                skills: self.skills,
                areas_of_expertise: self.areas_of_expertise,
            }),
            rating: rating_from_db(self.average_rating, self.total_reviews),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CompanyRow {
    profile_id: Uuid,
    user_id: Uuid,
    company_name: String,
    company_type: String,
    description: String,
    size: String,
    services_offered: Vec<String>,
    requirements: Vec<String>,
    average_rating: f64,
    total_reviews: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CompanyRow {
    fn into_profile(self) -> AuthResult<Profile> {
        Ok(Profile {
            profile_id: ProfileId::from_uuid(self.profile_id),
            user_id: UserId::from_uuid(self.user_id),
            details: ProfileDetails::Company(CompanyDetails {
                company_name: self.company_name,
                company_type: self.company_type,
                description: self.description,
                size: self.size,
                services_offered: self.services_offered,
                requirements: self.requirements,
            }),
            rating: rating_from_db(self.average_rating, self.total_reviews),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SupplierRow {
    profile_id: Uuid,
    user_id: Uuid,
    company_name: String,
    products_services: Vec<String>,
    description: String,
    certifications: Vec<String>,
    quality_score: f64,
    reliability_score: f64,
    competitiveness_score: f64,
    average_rating: f64,
    total_reviews: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SupplierRow {
    fn into_profile(self) -> AuthResult<Profile> {
        Ok(Profile {
            profile_id: ProfileId::from_uuid(self.profile_id),
            user_id: UserId::from_uuid(self.user_id),
            details: ProfileDetails::Supplier(SupplierDetails {
                company_name: self.company_name,
                products_services: self.products_services,
                description: self.description,
                certifications: self.certifications,
                quality_score: self.quality_score,
                reliability_score: self.reliability_score,
                competitiveness_score: self.competitiveness_score,
            }),
            rating: rating_from_db(self.average_rating, self.total_reviews),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ProfessionalListingRow {
    #[sqlx(flatten)]
    user: UserRow,
    profile_id: Uuid,
    specialties: Vec<String>,
    experience_years: i32,
    bio: String,
    education: String,
    certifications: Vec<String>,
    hourly_rate: Option<f64>,
    availability_status: String,
    skills: Vec<String>,
    areas_of_expertise: Vec<String>,
    average_rating: f64,
    total_reviews: i32,
    profile_created_at: DateTime<Utc>,
    profile_updated_at: DateTime<Utc>,
}

impl ProfessionalListingRow {
    fn into_pair(self) -> AuthResult<(User, Profile)> {
        let user_id = self.user.user_id;
        let profile = ProfessionalRow {
            profile_id: self.profile_id,
            user_id,
            specialties: self.specialties,
            experience_years: self.experience_years,
            bio: self.bio,
            education: self.education,
            certifications: self.certifications,
            hourly_rate: self.hourly_rate,
            availability_status: self.availability_status,
            skills: self.skills,
            areas_of_expertise: self.areas_of_expertise,
            average_rating: self.average_rating,
            total_reviews: self.total_reviews,
            created_at: self.profile_created_at,
            updated_at: self.profile_updated_at,
        }
        .into_profile()?;

        Ok((self.user.into_user()?, profile))
    }
}

fn years_to_db(years: u32) -> i32 {
    i32::try_from(years).unwrap_or(i32::MAX)
}

fn reviews_to_db(total: u32) -> i32 {
    i32::try_from(total).unwrap_or(i32::MAX)
}

fn rating_from_db(average_rating: f64, total_reviews: i32) -> RatingSummary {
    RatingSummary {
        average_rating,
        total_reviews: u32::try_from(total_reviews).unwrap_or_default(),
    }
}
