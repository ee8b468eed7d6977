//! Todo Handlers Module
//!
//! HTTP handlers for the todo endpoints, one file per endpoint. All of
//! them sit behind the auth middleware; mutations additionally scope their
//! queries to the authenticated owner.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs    - Module exports and documentation
//! ├── types.rs  - Request and response types
//! ├── create.rs - POST /api/todos
//! ├── list.rs   - GET /api/todos
//! ├── detail.rs - GET /api/todos/{id}
//! ├── update.rs - PUT /api/todos/{id}
//! └── remove.rs - DELETE /api/todos/{id}
//! ```

/// Request and response types
pub mod types;

/// Create handler
pub mod create;

/// List handler
pub mod list;

/// Get-by-id handler
pub mod detail;

/// Update handler
pub mod update;

/// Delete handler
pub mod remove;

// Re-export commonly used types
pub use types::{CreateTodoRequest, TodoListQuery, TodoResponse, UpdateTodoRequest};

// Re-export handlers
pub use create::create_todo;
pub use detail::get_todo;
pub use list::list_todos;
pub use remove::delete_todo;
pub use update::update_todo;
