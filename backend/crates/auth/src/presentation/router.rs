//! Auth Router
//!
//! Identity and profile directory routes, meant to be nested under `/api`.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_bearer;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + ProfileRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/auth/me", get(handlers::me))
        .route(
            "/professionals/me",
            get(handlers::get_own_profile::<R>).put(handlers::update_own_profile::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer::<R>,
        ));

    Router::new()
        .route("/auth/register", post(handlers::register::<R>))
        .route("/auth/login", post(handlers::login::<R>))
        .route("/professionals", get(handlers::list_professionals::<R>))
        .route(
            "/professionals/{user_id}",
            get(handlers::get_professional::<R>),
        )
        .route("/specialties", get(handlers::list_specialties))
        .merge(protected)
        .with_state(state)
}
