/**
 * Login Handler
 *
 * POST /api/auth/login. Validates the payload and delegates to the account
 * service; unknown email and wrong password surface identically.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::service;
use crate::auth::tokens::TokenService;
use crate::db::Database;
use crate::error::ApiError;
use crate::validation::users::validate_login;

/// Login handler
///
/// # Errors
///
/// * `400` - validation failures
/// * `401` - invalid credentials (email and password failures are one kind)
/// * `500` - signing or storage failures
pub async fn login(
    State(db): State<Database>,
    State(tokens): State<TokenService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!("login request received");

    let credentials = validate_login(&request).map_err(ApiError::Validation)?;
    let (user, token) = service::login(&db, &tokens, credentials).await?;

    Ok(Json(AuthResponse {
        message: "Login successful",
        user: UserResponse::from(&user),
        token,
    }))
}
