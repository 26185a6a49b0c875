//! Auth Middleware
//!
//! Middleware for requiring a bearer token on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;

use crate::application::ResolveCallerUseCase;
use crate::domain::entity::User;
use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Authenticated user, stored in request extensions
#[derive(Debug, Clone)]
pub struct Caller(pub User);

/// Middleware that requires `Authorization: Bearer <token>`
///
/// Rejects with 401 and a `WWW-Authenticate: Bearer` challenge.
pub async fn require_bearer<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers()).ok_or(AuthError::Unauthenticated)?;

    let use_case = ResolveCallerUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(&token).await?;

    tracing::debug!(user_id = %user.user_id, "Caller resolved");

    req.extensions_mut().insert(Caller(user));
    Ok(next.run(req).await)
}
