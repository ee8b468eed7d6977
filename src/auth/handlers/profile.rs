/**
 * Profile Handler
 *
 * GET /api/auth/profile. The auth middleware has already resolved the
 * caller; this handler only reshapes the attached identity.
 */

use axum::response::Json;

use crate::auth::handlers::types::{ProfileResponse, UserResponse};
use crate::middleware::auth::CurrentUser;

/// Current-user handler
pub async fn profile(CurrentUser(user): CurrentUser) -> Json<ProfileResponse> {
    tracing::debug!("profile request for {}", user.username);

    Json(ProfileResponse {
        user: UserResponse::from(&user),
    })
}
