//! Todos Module
//!
//! Ownership-scoped CRUD and filtered search over todo records.
//!
//! # Module Structure
//!
//! ```text
//! todos/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Domain types and queries
//! ├── service.rs  - Operations over the queries
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Ownership
//!
//! The owner field is the sole authorization boundary. Update and delete
//! match `id AND owner_id` in a single predicate, so a todo owned by
//! someone else is indistinguishable from one that does not exist. Reads
//! are open to any authenticated caller.

/// Domain types and database operations
pub mod db;

/// Todo operations
pub mod service;

/// HTTP handlers for todo endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use db::{Todo, TodoFilters, TodoPriority, TodoStatus};
pub use handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};
