/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container: the database pool wrapper and
 * the token service. Both are cheaply cloneable handles; there is no other
 * shared mutable state in the process.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need (`State<Database>`, `State<TokenService>`) instead of the whole
 * `AppState`, following Axum's recommended pattern.
 */

use axum::extract::FromRef;

use crate::auth::tokens::TokenService;
use crate::db::Database;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database pool wrapper
    pub db: Database,
    /// Bearer token issue/verify service
    pub tokens: TokenService,
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
