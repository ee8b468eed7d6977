/**
 * API Error Types
 *
 * This module defines the error type shared by all request handlers,
 * services, and middleware. Every failure a client can observe is one of
 * these variants, and each variant owns its HTTP status code.
 *
 * # Error Categories
 *
 * ## Client errors (400/401/404)
 *
 * - `Validation` - request payload failed validation (all messages collected)
 * - `DuplicateAccount` - registration hit an existing email or username
 * - `InvalidCredentials` - login failed (unknown email and wrong password
 *   are deliberately indistinguishable)
 * - `Unauthenticated` - missing, malformed, or rejected bearer token
 * - `UserNotFound` - token subject no longer resolves to a user
 * - `InvalidId` - path id is not a well-formed UUID
 * - `NotFound` - record absent, or present but owned by someone else
 *
 * ## Server errors (500)
 *
 * - `Database` - any storage failure
 * - `Hashing` - bcrypt failure
 * - `Internal` - everything else
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by handlers, services, and middleware
///
/// Each variant maps to exactly one HTTP status code via [`ApiError::status_code`].
/// The `IntoResponse` implementation lives in the `conversion` module.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload failed validation
    ///
    /// Carries every violation found, not just the first one. Rendered as
    /// `{"errors": [...]}` so clients can surface all problems at once.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// Registration matched an existing email or username
    #[error("User with this email or username already exists")]
    DuplicateAccount,

    /// Login failed
    ///
    /// Unknown email and wrong password share this variant so responses
    /// carry no account-enumeration signal.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request lacked a usable bearer token
    #[error("{0}")]
    Unauthenticated(&'static str),

    /// Token was valid but its subject no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Path id is not a well-formed UUID
    #[error("Invalid todo ID")]
    InvalidId,

    /// Record absent, or not owned by the caller
    ///
    /// Ownership mismatches reuse this variant so a caller cannot probe
    /// which ids exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// Storage failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Catch-all server error
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `DuplicateAccount`, `InvalidId` - 400 Bad Request
    /// - `InvalidCredentials`, `Unauthenticated` - 401 Unauthorized
    /// - `UserNotFound`, `NotFound` - 404 Not Found
    /// - `Database`, `Hashing`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateAccount | Self::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials | Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::UserNotFound | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hashing(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error must be hidden behind the fixed 500 message
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Hashing(_) | Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Validation(vec!["bad".to_string()]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DuplicateAccount.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Unauthenticated("Authentication required").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::NotFound("Todo not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detection() {
        assert!(ApiError::Internal("boom".to_string()).is_internal());
        assert!(ApiError::Database(sqlx::Error::RowNotFound).is_internal());
        assert!(!ApiError::DuplicateAccount.is_internal());
        assert!(!ApiError::Validation(vec![]).is_internal());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ApiError::DuplicateAccount.to_string(),
            "User with this email or username already exists"
        );
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(ApiError::InvalidId.to_string(), "Invalid todo ID");
        assert_eq!(ApiError::UserNotFound.to_string(), "User not found");
        assert_eq!(
            ApiError::NotFound("Todo not found").to_string(),
            "Todo not found"
        );
    }
}
