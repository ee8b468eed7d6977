//! todovault - Main Library
//!
//! todovault is a CRUD backend exposing user accounts and todo items over
//! HTTP with JSON payloads, using bearer-token authentication and SQLite
//! persistence.
//!
//! # Overview
//!
//! This library provides:
//! - Account registration and login with bcrypt-hashed passwords
//! - Signed, time-limited bearer tokens
//! - Ownership-scoped todo CRUD with filtered search
//! - Collect-all request validation ahead of every operation
//!
//! # Module Structure
//!
//! - **`db`** - SQLite pool wrapper, schema bootstrap, column codecs
//! - **`error`** - `ApiError` and its HTTP conversion
//! - **`validation`** - Pure validators between DTOs and services
//! - **`auth`** - Users, tokens, account service, account handlers
//! - **`todos`** - Todo types, queries, service, todo handlers
//! - **`middleware`** - Bearer-token auth middleware and extractor
//! - **`routes`** - Route tables and router assembly
//! - **`server`** - Configuration, state, app initialization
//!
//! # Request Pipeline
//!
//! ```text
//! HTTP request
//!   → validation (collects every violation)
//!   → auth middleware (protected routes)
//!   → handler → service → queries
//!   → handler formats the response
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use todovault::server::config::ServerConfig;
//! use todovault::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! // Serve app with Axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every failure a client can observe is an `error::ApiError` variant with
//! a fixed HTTP status. Internal errors are logged server-side and masked
//! behind a fixed message in production mode.

/// Database pool wrapper and column codecs
pub mod db;

/// API error type and HTTP conversion
pub mod error;

/// Request validation layer
pub mod validation;

/// Accounts: users, tokens, registration, login
pub mod auth;

/// Ownership-scoped todo CRUD and search
pub mod todos;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;
