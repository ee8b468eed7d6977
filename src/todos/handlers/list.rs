/**
 * List Todos Handler
 *
 * GET /api/todos with optional `status`, `priority`, and `search` query
 * parameters. Results come back newest first with a count.
 */

use axum::extract::{Query, State};
use axum::response::Json;

use crate::db::Database;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::todos::handlers::types::{TodoListQuery, TodoListResponse};
use crate::todos::service;
use crate::validation::todos::validate_todo_query;

/// List handler
///
/// # Errors
///
/// * `400` - invalid filter values
/// * `500` - storage failures
pub async fn list_todos(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<TodoListQuery>,
) -> Result<Json<TodoListResponse>, ApiError> {
    tracing::debug!("list todos request from {}", user.username);

    let filters = validate_todo_query(&query).map_err(ApiError::Validation)?;
    let todos = service::list(&db, &filters).await?;

    Ok(Json(TodoListResponse {
        count: todos.len(),
        todos: todos.into_iter().map(Into::into).collect(),
    }))
}
