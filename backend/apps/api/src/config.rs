//! Server configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded). Every variable except `DATABASE_URL` has a default.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use chrono::Duration;

const DEFAULT_TOKEN_MINUTES: i64 = 30;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

/// Process-wide settings
#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub cors_origins: CorsOrigins,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let token_minutes = parse_or(&lookup, "ACCESS_TOKEN_EXPIRE_MINUTES", DEFAULT_TOKEN_MINUTES)?;
        if token_minutes <= 0 {
            bail!("ACCESS_TOKEN_EXPIRE_MINUTES must be positive, got {token_minutes}");
        }

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let cors_origins = match lookup("CORS_ORIGINS").as_deref().map(str::trim) {
            None | Some("") | Some("*") => CorsOrigins::Any,
            Some(list) => CorsOrigins::List(
                list.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect(),
            ),
        };

        let mut auth = match lookup("SECRET_KEY").filter(|s| !s.is_empty()) {
            Some(secret) => AuthConfig::new(secret.into_bytes()),
            None if cfg!(debug_assertions) => {
                tracing::warn!(
                    "SECRET_KEY not set, using a random key; tokens and passwords will not survive a restart"
                );
                AuthConfig::with_random_secret()
            }
            None => bail!("SECRET_KEY must be set in release builds"),
        };
        if let Some(pepper) = lookup("PASSWORD_PEPPER").filter(|s| !s.is_empty()) {
            auth = auth.with_password_pepper(pepper.into_bytes());
        }
        let auth = auth.with_access_token_ttl(Duration::minutes(token_minutes));

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            cors_origins,
            auth,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}
