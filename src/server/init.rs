/**
 * Server Initialization
 *
 * This module builds the Axum application from a loaded configuration:
 * connect the database, construct the token service, assemble the router.
 *
 * # Error Handling
 *
 * A failed database connection is fatal. The server has nothing to serve
 * without its store, so the error propagates to `main` and the process
 * exits instead of limping along.
 */

use axum::Router;

use crate::auth::tokens::TokenService;
use crate::db::Database;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Loaded server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the database cannot be opened
/// or its schema cannot be applied.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing todovault backend server");
    config.environment.pin();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database ready");

    let tokens = TokenService::new(&config.jwt_secret);

    let app_state = AppState { db, tokens };
    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
