//! API Error Module
//!
//! This module defines the error type used across handlers, services, and
//! middleware, together with its HTTP conversion.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error variants and status code mapping
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers return
//! `Result<_, ApiError>` directly. Validation failures render as
//! `{"errors": [...]}`; every other error renders as `{"error": "..."}`.
//! Internal errors are masked behind a fixed message and logged.

/// Error variants and status code mapping
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
