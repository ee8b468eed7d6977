/**
 * Authentication Middleware
 *
 * This module protects routes that require a signed-in user. It extracts
 * and verifies the bearer token from the Authorization header, resolves the
 * token's subject to a user, and attaches that identity to the request.
 *
 * The verification step never touches the database; the lookup that follows
 * uses a projection without the password hash, so the hash never enters a
 * request's lifetime.
 */

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::users::{self, UserIdentity};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authentication middleware
///
/// Steps, in order:
/// 1. Extract the token from `Authorization: Bearer <token>`; a missing or
///    malformed header is `Unauthenticated` (401)
/// 2. Verify the token; any verification failure is `Unauthenticated` (401)
/// 3. Resolve the subject to a user, hash excluded; a subject that no
///    longer exists is `UserNotFound` (404)
/// 4. Attach the resolved [`UserIdentity`] to the request and continue
///
/// Storage failures during the lookup stay 500.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = header.and_then(|value| value.strip_prefix("Bearer ")).ok_or_else(|| {
        tracing::warn!("request without usable Authorization header");
        ApiError::Unauthenticated("Authentication required")
    })?;

    let subject = state.tokens.verify(token)?;

    let identity = users::find_identity_by_id(&state.db, subject)
        .await?
        .ok_or_else(|| {
            tracing::warn!("token subject no longer exists: {}", subject);
            ApiError::UserNotFound
        })?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by [`require_auth`]
///
/// Handlers take `CurrentUser(user)` as a parameter and thread the identity
/// explicitly into service calls. Using it on a route outside the
/// middleware is a wiring bug and rejects with 401.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub UserIdentity);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::warn!("CurrentUser used on a route without the auth middleware");
                ApiError::Unauthenticated("Authentication required")
            })
    }
}
