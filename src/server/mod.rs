//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration with defaults
//! └── init.rs   - App creation (store connect + router assembly)
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env()` reads the environment
//! 2. **Store**: the database is opened and its schema applied; failure
//!    here is fatal
//! 3. **State**: `AppState` bundles the pool wrapper and token service
//! 4. **Router**: all routes and layers are assembled

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
