/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors, allowing
 * them to be produced from extractor and token failures and converted into
 * HTTP responses.
 *
 * # Response Format
 *
 * Validation failures carry every collected message:
 * ```json
 * { "errors": ["Title is required and cannot be longer than 100 characters"] }
 * ```
 *
 * All other client errors carry a single message:
 * ```json
 * { "error": "Invalid credentials" }
 * ```
 *
 * Server errors always respond with the same fixed message; the underlying
 * detail is logged, and echoed in a `message` field only outside production.
 */

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Json, Response};

use crate::auth::tokens::TokenError;
use crate::error::types::ApiError;
use crate::server::config::Environment;

/// Fixed public message for all 500 responses
const INTERNAL_ERROR_MESSAGE: &str = "There is an error.";

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Internal errors are logged with their full detail and masked behind
    /// [`INTERNAL_ERROR_MESSAGE`]; in development the detail is additionally
    /// echoed in the body to ease debugging. The mode is the one pinned at
    /// startup, not a fresh read of the process environment.
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation(messages) => serde_json::json!({ "errors": messages }),
            _ if self.is_internal() => {
                tracing::error!("request failed: {}", self);
                if Environment::active().is_development() {
                    serde_json::json!({
                        "error": INTERNAL_ERROR_MESSAGE,
                        "message": self.to_string(),
                    })
                } else {
                    serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE })
                }
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body rejections surface as validation failures
///
/// Malformed JSON and type mismatches are caught by the extractor before
/// the validation layer runs; the deserializer's message becomes the single
/// entry in the `errors` array.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![rejection.body_text()])
    }
}

/// Token failures map onto the auth error kinds
///
/// A rejected token is an authentication failure; a signing failure is a
/// server fault.
impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => ApiError::Unauthenticated("Invalid or expired token"),
            TokenError::Signing(detail) => ApiError::Internal(detail),
        }
    }
}
