/**
 * Create Todo Handler
 *
 * POST /api/todos. Validates the payload and creates a todo owned by the
 * authenticated caller; nothing in the request body can redirect ownership.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::db::Database;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::todos::handlers::types::{CreateTodoRequest, TodoEnvelope};
use crate::todos::service;
use crate::validation::todos::validate_new_todo;

/// Create handler
///
/// # Errors
///
/// * `400` - validation failures (all collected)
/// * `500` - storage failures
pub async fn create_todo(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoEnvelope>), ApiError> {
    let Json(request) = payload?;
    tracing::debug!("create todo request from {}", user.username);

    let draft = validate_new_todo(&request).map_err(ApiError::Validation)?;
    let todo = service::create(&db, user.id, draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(TodoEnvelope {
            message: "Todo created successfully",
            todo: todo.into(),
        }),
    ))
}
