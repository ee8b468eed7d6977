/**
 * Todo Detail Handler
 *
 * GET /api/todos/{id}. The id is checked for shape before any lookup;
 * reads are open to any authenticated caller.
 */

use axum::extract::{Path, State};
use axum::response::Json;

use crate::db::Database;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::todos::handlers::types::TodoDetailResponse;
use crate::todos::service;

/// Get-by-id handler
///
/// # Errors
///
/// * `400` - malformed id
/// * `404` - no todo with this id
/// * `500` - storage failures
pub async fn get_todo(
    State(db): State<Database>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<TodoDetailResponse>, ApiError> {
    let id = service::parse_todo_id(&id)?;

    match service::get(&db, id).await? {
        Some(todo) => Ok(Json(TodoDetailResponse { todo: todo.into() })),
        None => Err(ApiError::NotFound("Todo not found")),
    }
}
