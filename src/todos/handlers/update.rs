/**
 * Update Todo Handler
 *
 * PUT /api/todos/{id}. Accepts any subset of fields and merges them over
 * the stored record. A todo owned by someone else gets the same 404 as one
 * that does not exist.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;

use crate::db::Database;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::todos::handlers::types::{TodoEnvelope, UpdateTodoRequest};
use crate::todos::service;
use crate::validation::todos::validate_todo_update;

/// Update handler
///
/// # Errors
///
/// * `400` - malformed id or validation failures
/// * `404` - todo absent or not owned by the caller (indistinguishable)
/// * `500` - storage failures
pub async fn update_todo(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoEnvelope>, ApiError> {
    let Json(request) = payload?;
    let id = service::parse_todo_id(&id)?;
    tracing::debug!("update todo request from {} for {}", user.username, id);

    let changes = validate_todo_update(&request).map_err(ApiError::Validation)?;

    match service::update(&db, id, user.id, changes).await? {
        Some(todo) => Ok(Json(TodoEnvelope {
            message: "Todo updated successfully",
            todo: todo.into(),
        })),
        None => Err(ApiError::NotFound(
            "Todo not found or you do not have permission to update it",
        )),
    }
}
