/**
 * Todo Validation
 *
 * Validators for todo create, update, and list-query payloads. Rules:
 *
 * - title: required, 1-100 characters after trimming
 * - description: required, 1-500 characters after trimming
 * - status: one of `pending`, `in-progress`, `completed` (default `pending`)
 * - priority: one of `low`, `medium`, `high` (default `medium`)
 * - due date: RFC3339 or `YYYY-MM-DD`
 * - search: non-empty after trimming
 *
 * Update validation applies the same rules only to fields the client sent;
 * a `null` due date is kept as an explicit request to clear the field.
 */

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::todos::db::{TodoChanges, TodoDraft, TodoFilters, TodoPriority, TodoStatus};
use crate::todos::handlers::types::{CreateTodoRequest, TodoListQuery, UpdateTodoRequest};

/// Validate a create payload
///
/// Applies the enum defaults, so the returned draft is complete.
pub fn validate_new_todo(request: &CreateTodoRequest) -> Result<TodoDraft, Vec<String>> {
    let mut errors = Vec::new();

    let title = request.title.as_deref().unwrap_or("").trim();
    if title.is_empty() || title.chars().count() > 100 {
        errors.push("Title is required and cannot be longer than 100 characters".to_string());
    }

    let description = request.description.as_deref().unwrap_or("").trim();
    if description.is_empty() || description.chars().count() > 500 {
        errors
            .push("Description is required and cannot be longer than 500 characters".to_string());
    }

    let status = match request.status.as_deref() {
        None => TodoStatus::Pending,
        Some(raw) => TodoStatus::from_str(raw).unwrap_or_else(|| {
            errors.push("Invalid status".to_string());
            TodoStatus::Pending
        }),
    };

    let priority = match request.priority.as_deref() {
        None => TodoPriority::Medium,
        Some(raw) => TodoPriority::from_str(raw).unwrap_or_else(|| {
            errors.push("Invalid priority".to_string());
            TodoPriority::Medium
        }),
    };

    let due_date = match request.due_date.as_deref() {
        None => None,
        Some(raw) => {
            let parsed = parse_due_date(raw);
            if parsed.is_none() {
                errors.push("Invalid date format".to_string());
            }
            parsed
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TodoDraft {
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        due_date,
    })
}

/// Validate an update payload
///
/// Only fields present in the payload are checked and carried into the
/// returned [`TodoChanges`]. An empty payload is valid and changes nothing
/// except the update timestamp.
pub fn validate_todo_update(request: &UpdateTodoRequest) -> Result<TodoChanges, Vec<String>> {
    let mut errors = Vec::new();
    let mut changes = TodoChanges::default();

    if let Some(raw) = request.title.as_deref() {
        let title = raw.trim();
        if title.is_empty() {
            errors.push("Title cannot be empty".to_string());
        } else if title.chars().count() > 100 {
            errors.push("Title cannot be longer than 100 characters".to_string());
        } else {
            changes.title = Some(title.to_string());
        }
    }

    if let Some(raw) = request.description.as_deref() {
        let description = raw.trim();
        if description.is_empty() {
            errors.push("Description cannot be empty".to_string());
        } else if description.chars().count() > 500 {
            errors.push("Description cannot be longer than 500 characters".to_string());
        } else {
            changes.description = Some(description.to_string());
        }
    }

    if let Some(raw) = request.status.as_deref() {
        match TodoStatus::from_str(raw) {
            Some(status) => changes.status = Some(status),
            None => errors.push("Invalid status".to_string()),
        }
    }

    if let Some(raw) = request.priority.as_deref() {
        match TodoPriority::from_str(raw) {
            Some(priority) => changes.priority = Some(priority),
            None => errors.push("Invalid priority".to_string()),
        }
    }

    match &request.due_date {
        None => {}
        // Explicit null clears the due date
        Some(None) => changes.due_date = Some(None),
        Some(Some(raw)) => match parse_due_date(raw) {
            Some(parsed) => changes.due_date = Some(Some(parsed)),
            None => errors.push("Invalid date format".to_string()),
        },
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(changes)
}

/// Validate list-query parameters
pub fn validate_todo_query(query: &TodoListQuery) -> Result<TodoFilters, Vec<String>> {
    let mut errors = Vec::new();
    let mut filters = TodoFilters::default();

    if let Some(raw) = query.status.as_deref() {
        match TodoStatus::from_str(raw) {
            Some(status) => filters.status = Some(status),
            None => errors.push("Invalid status".to_string()),
        }
    }

    if let Some(raw) = query.priority.as_deref() {
        match TodoPriority::from_str(raw) {
            Some(priority) => filters.priority = Some(priority),
            None => errors.push("Invalid priority".to_string()),
        }
    }

    if let Some(raw) = query.search.as_deref() {
        let term = raw.trim();
        if term.is_empty() {
            errors.push("Search query cannot be empty".to_string());
        } else {
            filters.search = Some(term.to_string());
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(filters)
}

/// Parse a due date from the two accepted wire formats
///
/// Date-only values are taken as midnight UTC.
fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}
