//! Validation Module
//!
//! Pure validation functions sitting between the request DTOs and the
//! services. Every validator walks the whole payload and collects all
//! violations before failing, so a client sees every problem in one
//! response. On success the validator returns the typed, normalized value
//! the service layer consumes; services never re-check these rules.
//!
//! # Module Structure
//!
//! ```text
//! validation/
//! ├── mod.rs   - Shared helpers (email shape check)
//! ├── users.rs - Registration and login validators
//! └── todos.rs - Todo create/update/query validators
//! ```

/// Registration and login validators
pub mod users;

/// Todo create/update/query validators
pub mod todos;

/// Check an email address for plausible shape
///
/// Accepts `local@domain.tld` where no part is empty, nothing contains
/// whitespace, and the domain has a dot with text on both sides. This is a
/// shape check, not RFC 5322 parsing.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
