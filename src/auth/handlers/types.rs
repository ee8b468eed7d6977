/**
 * Account Handler Types
 *
 * Request and response types for the account endpoints. Request fields are
 * all optional strings so that a missing field reaches the validation layer
 * as a violation instead of a deserialization failure; the validators own
 * the "field is required" messages.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::{User, UserIdentity};

/// Registration request
///
/// All fields required; absence is reported by the validator.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Chosen username (3-30 chars after trimming)
    pub username: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Plaintext password (hashed before storage, never echoed)
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: Option<String>,
    /// Plaintext password (verified against the stored hash)
    pub password: Option<String>,
}

/// User fields safe to return to clients
///
/// This is the only shape a user ever takes on the wire; the password hash
/// has no serializable representation anywhere in the crate.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<&UserIdentity> for UserResponse {
    fn from(identity: &UserIdentity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.clone(),
            email: identity.email.clone(),
        }
    }
}

/// Response for register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Outcome message
    pub message: &'static str,
    /// The account, without sensitive fields
    pub user: UserResponse,
    /// Bearer token for immediate authentication
    pub token: String,
}

/// Response for the profile endpoint
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_user_response_omits_hash() {
        let user = User {
            id: Uuid::new_v4(),
            username: "ann".to_string(),
            email: "ann@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let serialized = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert_eq!(serialized["username"], "ann");
        assert_eq!(serialized["email"], "ann@example.com");
        assert_eq!(serialized["id"], user.id.to_string());
        assert_eq!(serialized.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(request.username.is_none());
        assert!(request.email.is_none());
        assert!(request.password.is_none());
    }
}
