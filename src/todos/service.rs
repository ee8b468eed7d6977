/**
 * Todo Service
 *
 * Orchestrates todo operations between the HTTP handlers and the queries in
 * the db module. Mutations run scoped to the authenticated owner, so a todo
 * owned by someone else and a todo that does not exist produce the same
 * `None`. Reads are open to any authenticated caller.
 */

use uuid::Uuid;

use crate::db::Database;
use crate::error::ApiError;
use crate::todos::db::{
    delete_todo, find_todo_by_id, find_todo_by_id_and_owner, insert_todo, list_todos, update_todo,
    Todo, TodoChanges, TodoDraft, TodoFilters,
};

/// Parse a path segment into a todo ID
pub fn parse_todo_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId)
}

/// Create a todo owned by `owner_id`
///
/// The owner always comes from the authenticated identity; nothing in the
/// request payload can redirect it. Returns the stored record with its owner
/// resolved.
pub async fn create(db: &Database, owner_id: Uuid, draft: TodoDraft) -> Result<Todo, ApiError> {
    let id = Uuid::new_v4();
    insert_todo(db, id, owner_id, &draft).await?;

    let todo = find_todo_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::Internal("created todo could not be reloaded".to_string()))?;

    tracing::info!("todo created: {} (owner {})", todo.id, owner_id);
    Ok(todo)
}

/// List todos matching the filters, newest first
pub async fn list(db: &Database, filters: &TodoFilters) -> Result<Vec<Todo>, ApiError> {
    Ok(list_todos(db, filters).await?)
}

/// Get a single todo by ID
pub async fn get(db: &Database, id: Uuid) -> Result<Option<Todo>, ApiError> {
    Ok(find_todo_by_id(db, id).await?)
}

/// Apply field changes to a todo owned by `owner_id`
///
/// Unsent fields keep their stored values. Returns `None` when the todo is
/// absent or owned by someone else.
pub async fn update(
    db: &Database,
    id: Uuid,
    owner_id: Uuid,
    changes: TodoChanges,
) -> Result<Option<Todo>, ApiError> {
    let existing = match find_todo_by_id_and_owner(db, id, owner_id).await? {
        Some(todo) => todo,
        None => {
            tracing::warn!("todo update rejected: {} missing or foreign", id);
            return Ok(None);
        }
    };

    let draft = changes.apply_to(existing);

    // The row can disappear between the read and the write; report that the
    // same way as a missing todo.
    if update_todo(db, id, owner_id, &draft).await? == 0 {
        return Ok(None);
    }

    tracing::info!("todo updated: {}", id);
    find_todo_by_id_and_owner(db, id, owner_id).await.map_err(ApiError::from)
}

/// Delete a todo owned by `owner_id`
///
/// Returns `false` when the todo is absent or owned by someone else.
pub async fn delete(db: &Database, id: Uuid, owner_id: Uuid) -> Result<bool, ApiError> {
    let removed = delete_todo(db, id, owner_id).await?;
    if removed {
        tracing::info!("todo deleted: {}", id);
    } else {
        tracing::warn!("todo delete rejected: {} missing or foreign", id);
    }
    Ok(removed)
}
