/**
 * API Route Configuration
 *
 * This module defines the route tables for the API endpoints.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Protected (bearer token required)
 * - `GET /api/auth/profile` - Current user info
 * - `POST /api/todos` - Create todo
 * - `GET /api/todos` - List todos with optional filters
 * - `GET /api/todos/{id}` - Get todo by id
 * - `PUT /api/todos/{id}` - Update todo (owner only)
 * - `DELETE /api/todos/{id}` - Delete todo (owner only)
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers::{login, profile, register};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::todos::handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};

/// Configure API routes
///
/// The protected table sits behind the auth middleware via `route_layer`,
/// so the middleware only runs for routes that actually matched; unknown
/// paths still reach the fallback as plain 404s.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - Application state, cloned into the auth middleware
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    let protected = Router::new()
        .route("/api/auth/profile", get(profile))
        .route("/api/todos", post(create_todo).get(list_todos))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    router.merge(public).merge(protected)
}
