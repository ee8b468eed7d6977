//! Account Handlers Module
//!
//! HTTP handlers for the account endpoints, one file per endpoint.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - Registration handler
//! ├── login.rs    - Login handler
//! └── profile.rs  - Current-user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`profile`** - GET /api/auth/profile (behind the auth middleware)
//!
//! # Flow
//!
//! Handlers validate the payload, call the account service with typed
//! input, and reshape the result; they never touch bcrypt or the users
//! table directly.

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current-user handler
pub mod profile;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use profile::profile;
pub use register::register;
