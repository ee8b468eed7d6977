/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables, with
 * documented defaults for local development.
 *
 * # Configuration Sources
 *
 * | Variable       | Default               | Meaning                       |
 * |----------------|-----------------------|-------------------------------|
 * | `PORT`         | `3000`                | Listening port                |
 * | `DATABASE_URL` | `sqlite:todovault.db` | SQLite connection string      |
 * | `JWT_SECRET`   | dev-only value        | Token signing secret          |
 * | `APP_ENV`      | `development`         | `development` or `production` |
 *
 * # Error Handling
 *
 * Unset variables fall back to their defaults; a malformed `PORT` also
 * falls back. Using the default signing secret is logged as a warning so
 * it cannot slip into production silently.
 */

use std::sync::OnceLock;

/// Fallback signing secret for local development only
const DEV_JWT_SECRET: &str = "dev-secret-change-me";

/// Mode pinned at startup, read by the error response path
static ACTIVE_ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

/// Environment mode flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read the mode from `APP_ENV`
    ///
    /// Anything other than `production` is development.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Whether error responses may echo internal detail
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Pin this mode as the process-wide active environment
    ///
    /// Called once during server initialization with the mode captured by
    /// [`ServerConfig::from_env`]. Later calls are ignored.
    pub fn pin(self) {
        let _ = ACTIVE_ENVIRONMENT.set(self);
    }

    /// The mode pinned at startup
    ///
    /// Falls back to reading `APP_ENV` once when nothing was pinned, which
    /// only happens in contexts that never ran server initialization.
    pub fn active() -> Self {
        *ACTIVE_ENVIRONMENT.get_or_init(Self::from_env)
    }
}

/// Server configuration loaded at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// SQLite connection string
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Environment mode flag
    pub environment: Environment,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(3000);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:todovault.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using the development default");
            DEV_JWT_SECRET.to_string()
        });

        let environment = Environment::from_env();

        Self {
            port,
            database_url,
            jwt_secret,
            environment,
        }
    }
}
