/**
 * Registration Handler
 *
 * POST /api/auth/register. Validates the payload, delegates to the account
 * service, and returns 201 with the new user and a bearer token.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::service;
use crate::auth::tokens::TokenService;
use crate::db::Database;
use crate::error::ApiError;
use crate::validation::users::validate_register;

/// Register handler
///
/// # Errors
///
/// * `400` - validation failures (all collected) or a duplicate email/username
/// * `500` - hashing, signing, or storage failures
pub async fn register(
    State(db): State<Database>,
    State(tokens): State<TokenService>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Json(request) = payload?;
    tracing::debug!("registration request received");

    let account = validate_register(&request).map_err(ApiError::Validation)?;
    let (user, token) = service::register(&db, &tokens, account).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully",
            user: UserResponse::from(&user),
            token,
        }),
    ))
}
