//! HTTP Handlers

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AuthenticateInput, AuthenticateUseCase, GetProfileUseCase, ListProfessionalsUseCase,
    RegisterInput, RegisterUseCase, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::domain::repository::{ProfessionalFilter, ProfileRepository, UserRepository};
use crate::domain::value_object::{UserType, specialty};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthResponse, LoginRequest, ProfessionalsQuery, ProfileViewResponse, RegisterRequest,
    SpecialtiesResponse, UpdateProfileRequest, UserResponse,
};
use crate::presentation::middleware::Caller;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register / Login
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(mut req): Json<RegisterRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let user_type = match req.user_type.as_deref() {
        None => UserType::default(),
        Some(code) => UserType::from_code(code)
            .ok_or_else(|| AuthError::Validation(format!("Unknown user_type: {code}")))?,
    };

    let profile = req.take_profile_draft();
    let input = RegisterInput {
        email: req.email,
        password: req.password,
        user_type,
        full_name: req.full_name,
        phone: req.phone,
        location: req.location,
        profile,
    };

    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    Ok(Json(output.into()))
}

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        AuthenticateUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(AuthenticateInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(output.into()))
}

/// GET /api/auth/me
pub async fn me(Extension(Caller(user)): Extension<Caller>) -> Json<UserResponse> {
    Json(user.into())
}

// ============================================================================
// Profiles
// ============================================================================

/// GET /api/professionals
pub async fn list_professionals<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<ProfessionalsQuery>,
) -> AuthResult<Json<Vec<ProfileViewResponse>>>
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProfessionalsUseCase::new(state.repo.clone());
    let views = use_case
        .execute(ProfessionalFilter {
            specialty: query.specialty,
            location: query.location,
        })
        .await?;

    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/professionals/{user_id}
pub async fn get_professional<R>(
    State(state): State<AuthAppState<R>>,
    Path(user_id): Path<String>,
) -> AuthResult<Json<ProfileViewResponse>>
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let user_id: UserId = user_id
        .parse()
        .map_err(|_| AuthError::NotFound("Professional"))?;

    let use_case = GetProfileUseCase::new(state.repo.clone(), state.repo.clone());
    let view = use_case.professional(&user_id).await?;

    Ok(Json(view.into()))
}

/// GET /api/professionals/me
pub async fn get_own_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(Caller(user)): Extension<Caller>,
) -> AuthResult<Json<ProfileViewResponse>>
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone(), state.repo.clone());
    let view = use_case.own(user).await?;

    Ok(Json(view.into()))
}

/// PUT /api/professionals/me
pub async fn update_own_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(Caller(user)): Extension<Caller>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<ProfileViewResponse>>
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let (user_patch, profile_patch) = req.into_patches();

    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.repo.clone());
    let view = use_case
        .execute(
            user,
            UpdateProfileInput {
                user: user_patch,
                profile: profile_patch,
            },
        )
        .await?;

    Ok(Json(view.into()))
}

/// GET /api/specialties
pub async fn list_specialties() -> Json<SpecialtiesResponse> {
    Json(SpecialtiesResponse {
        specialties: specialty::catalogue(),
    })
}
