/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. The password hash
 * never leaves this layer except inside the full `User` record used by the
 * account service; lookups made on behalf of request handling use the
 * `UserIdentity` projection, which excludes it.
 */

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::db::{decode_timestamp, decode_uuid, encode_timestamp, Database, Result};

/// User record as stored
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID (UUID, assigned at insert, immutable)
    pub id: Uuid,
    /// Username (unique, 3-30 chars, stored trimmed)
    pub username: String,
    /// Email address (unique, stored trimmed and lowercased)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// User projection without the password hash
///
/// This is what the auth middleware resolves and attaches to requests.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Create a new user
///
/// # Arguments
/// * `db` - Database handle
/// * `username` - Chosen username (already validated and trimmed)
/// * `email` - Email address (already validated, trimmed, lowercased)
/// * `password_hash` - Hashed password
///
/// # Returns
/// The created user record
pub async fn insert_user(
    db: &Database,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(encode_timestamp(now))
    .bind(encode_timestamp(now))
    .execute(db.pool())
    .await?;

    Ok(User {
        id,
        username: username.to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn find_by_email(db: &Database, email: &str) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT id, username, email, password_hash, created_at, updated_at
         FROM users
         WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(db.pool())
    .await?;

    match row {
        Some(row) => Ok(Some(row_to_user(&row)?)),
        None => Ok(None),
    }
}

/// Get user matching either email or username
///
/// Registration uses this single query for its duplicate check so both
/// uniqueness rules are tested in one round trip.
pub async fn find_by_email_or_username(
    db: &Database,
    email: &str,
    username: &str,
) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT id, username, email, password_hash, created_at, updated_at
         FROM users
         WHERE email = ? OR username = ?",
    )
    .bind(email)
    .bind(username)
    .fetch_optional(db.pool())
    .await?;

    match row {
        Some(row) => Ok(Some(row_to_user(&row)?)),
        None => Ok(None),
    }
}

/// Get the identity projection for a user ID
///
/// Selects only the public columns; the password hash is excluded at the
/// query level.
pub async fn find_identity_by_id(db: &Database, id: Uuid) -> Result<Option<UserIdentity>> {
    let row = sqlx::query(
        "SELECT id, username, email
         FROM users
         WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(db.pool())
    .await?;

    match row {
        Some(row) => Ok(Some(UserIdentity {
            id: decode_uuid(&row.try_get::<String, _>("id")?, "id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
        })),
        None => Ok(None),
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
    Ok(User {
        id: decode_uuid(&row.try_get::<String, _>("id")?, "id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: decode_timestamp(&row.try_get::<String, _>("created_at")?, "created_at")?,
        updated_at: decode_timestamp(&row.try_get::<String, _>("updated_at")?, "updated_at")?,
    })
}
