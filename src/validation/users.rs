/**
 * Account Validation
 *
 * Validators for registration and login payloads. Rules:
 *
 * - username: 3-30 characters after trimming
 * - email: plausible address shape; normalized to trimmed lowercase
 * - password: at least 6 characters to register; non-empty to log in
 *
 * Every rule is checked and every violation reported; nothing short-circuits.
 */

use crate::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::auth::service::{Credentials, NewAccount};
use crate::validation::is_valid_email;

/// Validate a registration payload
///
/// # Returns
///
/// A normalized [`NewAccount`] (username trimmed, email trimmed and
/// lowercased), or every violation found.
pub fn validate_register(request: &RegisterRequest) -> Result<NewAccount, Vec<String>> {
    let mut errors = Vec::new();

    let username = request.username.as_deref().unwrap_or("").trim();
    let length = username.chars().count();
    if length < 3 || length > 30 {
        errors.push("Username must be between 3 and 30 characters".to_string());
    }

    let email = request.email.as_deref().unwrap_or("").trim().to_lowercase();
    if !is_valid_email(&email) {
        errors.push("Please provide a valid email".to_string());
    }

    let password = request.password.as_deref().unwrap_or("");
    if password.chars().count() < 6 {
        errors.push("Password must be at least 6 characters long".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewAccount {
        username: username.to_string(),
        email,
        password: password.to_string(),
    })
}

/// Validate a login payload
///
/// The password only needs to be present; its length was enforced at
/// registration.
pub fn validate_login(request: &LoginRequest) -> Result<Credentials, Vec<String>> {
    let mut errors = Vec::new();

    let email = request.email.as_deref().unwrap_or("").trim().to_lowercase();
    if !is_valid_email(&email) {
        errors.push("Please provide a valid email".to_string());
    }

    let password = request.password.as_deref().unwrap_or("");
    if password.is_empty() {
        errors.push("Password is required".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Credentials {
        email,
        password: password.to_string(),
    })
}
