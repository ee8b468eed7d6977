//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation (layers, fallback)
//! └── api_routes.rs - API route tables (public and protected)
//! ```
//!
//! # Route Organization
//!
//! The public table carries registration and login; everything else sits
//! behind the auth middleware. Layers (tracing, CORS, security headers)
//! wrap the assembled router in `router.rs`.

/// Main router creation
pub mod router;

/// API route tables
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
