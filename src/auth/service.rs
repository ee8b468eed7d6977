/**
 * Account Service
 *
 * This module implements registration and login on top of the user queries
 * and the token service. Handlers never touch bcrypt or the users table
 * directly; they pass validated input here and translate the result.
 */

use crate::auth::tokens::TokenService;
use crate::auth::users::{self, User};
use crate::db::Database;
use crate::error::ApiError;

/// Validated registration input
///
/// Produced by the validation layer: username trimmed, email trimmed and
/// lowercased, password length already checked.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Validated login input
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Register a new account
///
/// Flow:
/// 1. One existence query covers both uniqueness rules
///    (`email = ? OR username = ?`)
/// 2. Hash the password with bcrypt
/// 3. Insert the user
/// 4. Issue a token so the client is authenticated immediately
///
/// # Errors
///
/// * `DuplicateAccount` - email or username already taken; a UNIQUE
///   violation from a concurrent insert maps to the same error
/// * `Hashing` / `Database` / `Internal` - infrastructure failures
pub async fn register(
    db: &Database,
    tokens: &TokenService,
    account: NewAccount,
) -> Result<(User, String), ApiError> {
    if users::find_by_email_or_username(db, &account.email, &account.username)
        .await?
        .is_some()
    {
        tracing::warn!("registration rejected: email or username taken");
        return Err(ApiError::DuplicateAccount);
    }

    let password_hash = bcrypt::hash(&account.password, bcrypt::DEFAULT_COST)?;

    let user = users::insert_user(db, &account.username, &account.email, &password_hash)
        .await
        .map_err(|err| {
            // Two registrations can race past the existence check; the
            // schema UNIQUE constraint catches the loser.
            if err
                .as_database_error()
                .map(|db_err| db_err.is_unique_violation())
                .unwrap_or(false)
            {
                ApiError::DuplicateAccount
            } else {
                ApiError::Database(err)
            }
        })?;

    let token = tokens.issue(user.id)?;

    tracing::info!("user registered: {}", user.username);
    Ok((user, token))
}

/// Authenticate an existing account
///
/// Unknown email and wrong password both return `InvalidCredentials`;
/// the response never reveals which check failed.
pub async fn login(
    db: &Database,
    tokens: &TokenService,
    credentials: Credentials,
) -> Result<(User, String), ApiError> {
    let user = match users::find_by_email(db, &credentials.email).await? {
        Some(user) => user,
        None => {
            tracing::warn!("login rejected: unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let valid = bcrypt::verify(&credentials.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("login rejected: wrong password for {}", user.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = tokens.issue(user.id)?;

    tracing::info!("user logged in: {}", user.username);
    Ok((user, token))
}
