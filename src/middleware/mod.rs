//! Middleware Module
//!
//! HTTP middleware applied ahead of the handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Bearer-token authentication for protected routes

pub mod auth;

pub use auth::{require_auth, CurrentUser};
