//! Authentication Module
//!
//! This module handles user accounts: registration, login, bearer tokens,
//! and the user queries backing them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── users.rs    - User model and database operations
//! ├── tokens.rs   - Bearer token issue/verify
//! ├── service.rs  - Registration and login logic
//! └── handlers/   - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs
//!     ├── register.rs
//!     ├── login.rs
//!     └── profile.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: validated input → duplicate check → bcrypt hash → user
//!    created → token returned
//! 2. **Login**: validated input → credentials verified → token returned
//! 3. **Protected request**: token verified → identity resolved → attached
//!    to the request (see `middleware::auth`)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Tokens are signed and expire after 7 days
//! - Login failures are indistinguishable (no account enumeration)

/// User data model and database operations
pub mod users;

/// Bearer token generation and validation
pub mod tokens;

/// Registration and login logic
pub mod service;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{login, profile, register};
pub use tokens::TokenService;
