//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use auth::PgAuthRepository;
use auth::presentation::dto::MessageResponse;
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use config::{AppConfig, CorsOrigins};
use review::PgReviewRepository;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const BANNER: &str = "IQX Professionals Platform API";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,review=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!(
        key_fingerprint = %config.auth.key_fingerprint(),
        token_ttl_minutes = config.auth.access_token_ttl.num_minutes(),
        "Auth configured"
    );

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to database"
    );

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let identities = PgAuthRepository::new(pool.clone());
    let reviews = PgReviewRepository::new(pool);

    // CORS configuration
    let allow_origin = match &config.cors_origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(origins) => {
            let origins: Vec<http::HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            AllowOrigin::list(origins)
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let api = Router::new()
        .route("/", get(banner))
        .merge(auth::auth_router(identities.clone(), config.auth))
        .merge(review::review_router(reviews, identities));

    let app = Router::new()
        .route("/api/", get(banner))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/
async fn banner() -> Json<MessageResponse> {
    Json(MessageResponse { message: BANNER })
}
