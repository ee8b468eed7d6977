/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * route tables and the HTTP layers into a single Axum router.
 *
 * # Layers
 *
 * - Request tracing (`TraceLayer`)
 * - Permissive CORS for browser clients
 * - `X-Content-Type-Options: nosniff` and `X-Frame-Options: DENY` on every
 *   response
 *
 * # Fallback
 *
 * Unknown routes get a JSON 404 body, matching the error format of the
 * rest of the API.
 */

use axum::http::header::{HeaderValue, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database handle and token service)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(app_state)
}

/// JSON 404 for unknown routes
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}
