/**
 * Database Operations for Todos
 *
 * This module defines the todo domain types and their queries. Every read
 * joins the owner row so results carry the owner's public fields; mutations
 * match `id AND owner_id` in a single predicate, so a missing row and a row
 * owned by someone else are indistinguishable to the caller.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::Row;
use uuid::Uuid;

use crate::db::{decode_timestamp, decode_uuid, encode_timestamp, Database, Result};

/// Todo lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    /// Not started yet
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl Default for TodoStatus {
    fn default() -> Self {
        TodoStatus::Pending
    }
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Completed => "completed",
        }
    }

    /// Parse the exact wire value; no case folding
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TodoStatus::Pending),
            "in-progress" => Some(TodoStatus::InProgress),
            "completed" => Some(TodoStatus::Completed),
            _ => None,
        }
    }
}

/// Todo priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    Low,
    Medium,
    High,
}

impl Default for TodoPriority {
    fn default() -> Self {
        TodoPriority::Medium
    }
}

impl TodoPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoPriority::Low => "low",
            TodoPriority::Medium => "medium",
            TodoPriority::High => "high",
        }
    }

    /// Parse the exact wire value; no case folding
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(TodoPriority::Low),
            "medium" => Some(TodoPriority::Medium),
            "high" => Some(TodoPriority::High),
            _ => None,
        }
    }
}

/// Owner fields carried by every todo read
#[derive(Debug, Clone)]
pub struct TodoOwner {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Todo record with its owner resolved
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub owner: TodoOwner,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Complete field set for a todo write
///
/// Produced by create validation (with defaults applied) and by the update
/// merge, so inserts and updates share one shape.
#[derive(Debug, Clone)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: Option<DateTime<Utc>>,
}

/// Field-level changes from an update payload
///
/// `None` means the client did not send the field. For `due_date`,
/// `Some(None)` is an explicit request to clear the value.
#[derive(Debug, Clone, Default)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TodoChanges {
    /// Merge these changes over an existing record into a full write set
    pub fn apply_to(self, existing: Todo) -> TodoDraft {
        TodoDraft {
            title: self.title.unwrap_or(existing.title),
            description: self.description.unwrap_or(existing.description),
            status: self.status.unwrap_or(existing.status),
            priority: self.priority.unwrap_or(existing.priority),
            due_date: match self.due_date {
                Some(value) => value,
                None => existing.due_date,
            },
        }
    }
}

/// List filters; all optional and independent
#[derive(Debug, Clone, Default)]
pub struct TodoFilters {
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub search: Option<String>,
}

/// Shared SELECT head: todo columns plus the joined owner columns
const SELECT_TODO: &str = "SELECT t.id, t.title, t.description, t.status, t.priority, \
     t.due_date, t.created_at, t.updated_at, \
     u.id AS owner_id, u.username AS owner_username, u.email AS owner_email \
     FROM todos t \
     JOIN users u ON u.id = t.owner_id";

/// Insert a todo for an owner
///
/// # Arguments
/// * `db` - Database handle
/// * `id` - Pre-assigned todo ID
/// * `owner_id` - Owning user; callers must pass the authenticated identity
/// * `draft` - Complete, validated field set
pub async fn insert_todo(db: &Database, id: Uuid, owner_id: Uuid, draft: &TodoDraft) -> Result<()> {
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO todos (id, title, description, status, priority, due_date, owner_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(draft.status.as_str())
    .bind(draft.priority.as_str())
    .bind(draft.due_date.map(encode_timestamp))
    .bind(owner_id.to_string())
    .bind(encode_timestamp(now))
    .bind(encode_timestamp(now))
    .execute(db.pool())
    .await?;

    Ok(())
}

/// Get a todo by ID with its owner resolved
///
/// Not ownership-scoped; reads are open to any authenticated caller.
pub async fn find_todo_by_id(db: &Database, id: Uuid) -> Result<Option<Todo>> {
    let sql = format!("{SELECT_TODO} WHERE t.id = ?");

    let row = sqlx::query(&sql)
        .bind(id.to_string())
        .fetch_optional(db.pool())
        .await?;

    match row {
        Some(row) => Ok(Some(row_to_todo(&row)?)),
        None => Ok(None),
    }
}

/// Get a todo by ID, but only if `owner_id` owns it
pub async fn find_todo_by_id_and_owner(
    db: &Database,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<Todo>> {
    let sql = format!("{SELECT_TODO} WHERE t.id = ? AND t.owner_id = ?");

    let row = sqlx::query(&sql)
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(db.pool())
        .await?;

    match row {
        Some(row) => Ok(Some(row_to_todo(&row)?)),
        None => Ok(None),
    }
}

/// List todos, newest first
///
/// Filters combine with AND. The search term matches as a literal,
/// case-insensitive substring of title or description (`%` and `_` in the
/// term are escaped).
pub async fn list_todos(db: &Database, filters: &TodoFilters) -> Result<Vec<Todo>> {
    let mut clauses: Vec<&str> = Vec::new();
    if filters.status.is_some() {
        clauses.push("t.status = ?");
    }
    if filters.priority.is_some() {
        clauses.push("t.priority = ?");
    }
    if filters.search.is_some() {
        clauses.push(
            "(t.title LIKE '%' || ? || '%' ESCAPE '\\' \
             OR t.description LIKE '%' || ? || '%' ESCAPE '\\')",
        );
    }

    let sql = if clauses.is_empty() {
        format!("{SELECT_TODO} ORDER BY t.created_at DESC")
    } else {
        format!(
            "{SELECT_TODO} WHERE {} ORDER BY t.created_at DESC",
            clauses.join(" AND ")
        )
    };

    let mut query = sqlx::query(&sql);
    if let Some(status) = filters.status {
        query = query.bind(status.as_str());
    }
    if let Some(priority) = filters.priority {
        query = query.bind(priority.as_str());
    }
    if let Some(term) = &filters.search {
        let escaped = escape_like(term);
        query = query.bind(escaped.clone()).bind(escaped);
    }

    let rows = query.fetch_all(db.pool()).await?;
    rows.iter().map(row_to_todo).collect()
}

/// Overwrite a todo's fields, scoped to its owner
///
/// # Returns
/// Number of rows affected: 0 when the todo is absent or owned by someone
/// else, 1 otherwise.
pub async fn update_todo(
    db: &Database,
    id: Uuid,
    owner_id: Uuid,
    draft: &TodoDraft,
) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE todos
         SET title = ?, description = ?, status = ?, priority = ?, due_date = ?, updated_at = ?
         WHERE id = ? AND owner_id = ?",
    )
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(draft.status.as_str())
    .bind(draft.priority.as_str())
    .bind(draft.due_date.map(encode_timestamp))
    .bind(encode_timestamp(Utc::now()))
    .bind(id.to_string())
    .bind(owner_id.to_string())
    .execute(db.pool())
    .await?;

    Ok(result.rows_affected())
}

/// Delete a todo, scoped to its owner
///
/// # Returns
/// `true` iff exactly one row was removed.
pub async fn delete_todo(db: &Database, id: Uuid, owner_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ? AND owner_id = ?")
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .execute(db.pool())
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Escape LIKE wildcards so a search term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn row_to_todo(row: &sqlx::sqlite::SqliteRow) -> Result<Todo> {
    let status_raw: String = row.try_get("status")?;
    let status = TodoStatus::from_str(&status_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "status".to_string(),
        source: format!("unknown status '{status_raw}'").into(),
    })?;

    let priority_raw: String = row.try_get("priority")?;
    let priority =
        TodoPriority::from_str(&priority_raw).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "priority".to_string(),
            source: format!("unknown priority '{priority_raw}'").into(),
        })?;

    let due_date = match row.try_get::<Option<String>, _>("due_date")? {
        Some(raw) => Some(decode_timestamp(&raw, "due_date")?),
        None => None,
    };

    Ok(Todo {
        id: decode_uuid(&row.try_get::<String, _>("id")?, "id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status,
        priority,
        due_date,
        owner: TodoOwner {
            id: decode_uuid(&row.try_get::<String, _>("owner_id")?, "owner_id")?,
            username: row.try_get("owner_username")?,
            email: row.try_get("owner_email")?,
        },
        created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?, "created_at")?,
        updated_at: decode_timestamp(&row.try_get::<String, _>("updated_at")?, "updated_at")?,
    })
}
