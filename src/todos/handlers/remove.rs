/**
 * Delete Todo Handler
 *
 * DELETE /api/todos/{id}. Scoped to the owner; a second delete of the same
 * id reports 404, not an error.
 */

use axum::extract::{Path, State};
use axum::response::Json;

use crate::db::Database;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::todos::handlers::types::MessageResponse;
use crate::todos::service;

/// Delete handler
///
/// # Errors
///
/// * `400` - malformed id
/// * `404` - todo absent or not owned by the caller (indistinguishable)
/// * `500` - storage failures
pub async fn delete_todo(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = service::parse_todo_id(&id)?;
    tracing::debug!("delete todo request from {} for {}", user.username, id);

    if service::delete(&db, id, user.id).await? {
        Ok(Json(MessageResponse {
            message: "Todo deleted successfully",
        }))
    } else {
        Err(ApiError::NotFound(
            "Todo not found or you do not have permission to delete it",
        ))
    }
}
