/**
 * Todo Handler Types
 *
 * Request and response types for the todo endpoints. The wire format is
 * camelCase; request fields are optional strings so the validation layer
 * owns every "required" and enum rule and can report them all at once.
 *
 * The update request's `dueDate` is tri-state: absent keeps the stored
 * value, JSON `null` clears it, a string replaces it. Serde collapses
 * absent and null by default, so the field uses a small deserializer that
 * preserves the distinction as `Option<Option<String>>`.
 */

use serde::{Deserialize, Deserializer, Serialize};

use crate::todos::db::{Todo, TodoPriority, TodoStatus};

/// Create request
///
/// Any `owner` field a client sends is ignored by deserialization; the
/// owner always comes from the authenticated identity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    /// Title (1-100 chars after trimming)
    pub title: Option<String>,
    /// Description (1-500 chars after trimming)
    pub description: Option<String>,
    /// `pending` | `in-progress` | `completed`, defaults to `pending`
    pub status: Option<String>,
    /// `low` | `medium` | `high`, defaults to `medium`
    pub priority: Option<String>,
    /// RFC3339 or `YYYY-MM-DD`
    pub due_date: Option<String>,
}

/// Update request; any subset of fields
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    /// Absent = keep, null = clear, string = replace
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<String>>,
}

/// List query parameters; all optional and independent
#[derive(Debug, Default, Deserialize)]
pub struct TodoListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
}

/// Owner fields carried by every todo response
#[derive(Debug, Serialize)]
pub struct OwnerResponse {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Todo as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub owner: OwnerResponse,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title,
            description: todo.description,
            status: todo.status,
            priority: todo.priority,
            due_date: todo.due_date,
            owner: OwnerResponse {
                id: todo.owner.id.to_string(),
                username: todo.owner.username,
                email: todo.owner.email,
            },
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

/// Response for create and update
#[derive(Debug, Serialize)]
pub struct TodoEnvelope {
    pub message: &'static str,
    pub todo: TodoResponse,
}

/// Response for get-by-id
#[derive(Debug, Serialize)]
pub struct TodoDetailResponse {
    pub todo: TodoResponse,
}

/// Response for list
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub count: usize,
    pub todos: Vec<TodoResponse>,
}

/// Response for delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Deserialize a field that distinguishes absent from null
///
/// Only ever called when the field is present, so the value itself becomes
/// the inner option; `#[serde(default)]` supplies the outer `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
